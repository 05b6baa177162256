//! Heuristic move ordering for alpha-beta pruning.
//!
//! Captures score most-valuable-victim / least-valuable-attacker, promotions
//! add the promoted piece's value, quiet moves score zero. The sort is
//! stable so equally-scored moves keep generation order, which keeps the
//! search deterministic.

use crate::game_state::chess_types::{Board, ChessMove, PieceKind};
use crate::search::board_scoring::piece_value;

pub fn order_moves(moves: &mut [ChessMove], board: &Board) {
    moves.sort_by_key(|mv| -move_score(mv, board));
}

fn move_score(mv: &ChessMove, board: &Board) -> i32 {
    let mut score = 0i32;

    if mv.capture {
        let attacker = board
            .piece_at(mv.from)
            .map(|piece| piece_value(piece.kind))
            .unwrap_or(0);
        // En-passant captures land on an empty square; the victim is a pawn.
        let victim = board
            .piece_at(mv.to)
            .map(|piece| piece_value(piece.kind))
            .unwrap_or(piece_value(PieceKind::Pawn));
        score += 10 * victim - attacker;
    }

    if let Some(kind) = mv.promotion {
        score += piece_value(kind);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::order_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn captures_are_ranked_by_victim_value_before_quiet_moves() {
        // The e4 pawn can take the d5 queen or the f5 knight, or push.
        let game = GameState::from_fen("4k3/8/8/3q1n2/4P3/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let mut moves = all_legal_moves(&game);
        order_moves(&mut moves, &game.board);

        assert!(moves[0].capture, "a capture should lead the list");
        assert_eq!(
            game.board
                .piece_at(moves[0].to)
                .expect("best capture should have a victim")
                .kind,
            PieceKind::Queen
        );
        assert_eq!(
            game.board
                .piece_at(moves[1].to)
                .expect("second capture should have a victim")
                .kind,
            PieceKind::Knight
        );
    }

    #[test]
    fn promotions_outrank_quiet_moves_and_queen_leads() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("test FEN should parse");
        let mut moves = all_legal_moves(&game);
        order_moves(&mut moves, &game.board);

        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
        assert_eq!(moves[1].promotion, Some(PieceKind::Rook));
    }

    #[test]
    fn quiet_move_ties_preserve_generation_order() {
        let game = GameState::new_game();
        let unordered = all_legal_moves(&game);
        let mut ordered = unordered.clone();
        order_moves(&mut ordered, &game.board);

        // Every starting move is quiet, so ordering must be the identity.
        assert_eq!(ordered, unordered);
    }
}
