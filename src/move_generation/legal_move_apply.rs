//! Move application: the pure board transition and the committing entry point.
//!
//! `apply_move_copy` is the cheap exploration primitive used by legality
//! filtering and search; `play_move` is the sole state-advancing entry point
//! for real games and the only function here that can fail.

use crate::errors::ChessError;
use crate::game_state::chess_types::{
    CastleSide, ChessMove, Color, Piece, PieceKind, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::utils::fen_generator::generate_fen;

/// Produces the board position after `mv` without advancing turn, clocks, or
/// history. The move must come from the generator; an empty `from` square is
/// an internal invariant violation, not caller input.
pub fn apply_move_copy(game_state: &GameState, mv: &ChessMove) -> GameState {
    let mut next = game_state.clone();

    let piece = game_state.board.piece_at(mv.from);
    debug_assert!(piece.is_some(), "apply_move_copy from an empty square");
    let Some(piece) = piece else {
        return next;
    };

    // En-passant capture: the pawn lands on the vacant target square and the
    // captured pawn sits beside the origin row.
    if piece.kind == PieceKind::Pawn
        && game_state.en_passant_square == Some(mv.to)
        && mv.from.col != mv.to.col
    {
        next.board.set(Square::new(mv.from.row, mv.to.col), None);
    }

    update_castling_rights(game_state, &mut next, piece, mv);

    let placed = match mv.promotion {
        Some(kind) => Piece::new(piece.color, kind),
        None => piece,
    };
    next.board.set(mv.from, None);
    next.board.set(mv.to, Some(placed));

    if let Some(side) = mv.castle {
        relocate_castling_rook(&mut next, piece.color, side);
    }

    // The en-passant target lives for exactly one reply.
    next.en_passant_square = if piece.kind == PieceKind::Pawn
        && mv.from.row.abs_diff(mv.to.row) == 2
    {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };

    next
}

/// Advances a position for tree exploration: `apply_move_copy` plus turn
/// flip and clock upkeep, skipping legality validation and FEN history.
pub fn advance_position(game_state: &GameState, mv: &ChessMove) -> GameState {
    let pawn_move = matches!(
        game_state.board.piece_at(mv.from),
        Some(piece) if piece.kind == PieceKind::Pawn
    );

    let mut next = apply_move_copy(game_state, mv);
    next.side_to_move = game_state.side_to_move.opposite();
    next.halfmove_clock = if pawn_move || mv.capture {
        0
    } else {
        game_state.halfmove_clock + 1
    };
    if next.side_to_move == Color::White {
        next.fullmove_number += 1;
    }
    next
}

/// Validates and commits a move: the only path that can reject input, and
/// the only path that appends to `position_history`.
pub fn play_move(game_state: &GameState, mv: &ChessMove) -> Result<GameState, ChessError> {
    if game_status(game_state) != GameStatus::Ongoing {
        return Err(ChessError::GameAlreadyOver);
    }

    let legal = legal_moves_from(game_state, mv.from);
    let chosen = legal
        .iter()
        .find(|candidate| candidate.to == mv.to && candidate.promotion == mv.promotion)
        .ok_or(ChessError::IllegalMove)?;

    let mut next = advance_position(game_state, chosen);
    let fen = generate_fen(&next);
    next.position_history.push(fen);
    Ok(next)
}

fn update_castling_rights(
    game_state: &GameState,
    next: &mut GameState,
    piece: Piece,
    mv: &ChessMove,
) {
    if piece.kind == PieceKind::King {
        next.castling_rights &= !both_rights(piece.color);
    }

    if piece.kind == PieceKind::Rook {
        if let Some(right) = rook_home_right(piece.color, mv.from) {
            next.castling_rights &= !right;
        }
    }

    // Capturing a rook on its original square voids that right for good.
    if let Some(captured) = game_state.board.piece_at(mv.to) {
        if captured.kind == PieceKind::Rook {
            if let Some(right) = rook_home_right(captured.color, mv.to) {
                next.castling_rights &= !right;
            }
        }
    }
}

fn both_rights(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

fn rook_home_right(color: Color, square: Square) -> Option<u8> {
    if square.row != color.back_row() {
        return None;
    }
    match (color, square.col) {
        (Color::White, 7) => Some(CASTLE_WHITE_KINGSIDE),
        (Color::White, 0) => Some(CASTLE_WHITE_QUEENSIDE),
        (Color::Black, 7) => Some(CASTLE_BLACK_KINGSIDE),
        (Color::Black, 0) => Some(CASTLE_BLACK_QUEENSIDE),
        _ => None,
    }
}

fn relocate_castling_rook(next: &mut GameState, color: Color, side: CastleSide) {
    let row = color.back_row();
    let (rook_from, rook_to) = match side {
        CastleSide::KingSide => (Square::new(row, 7), Square::new(row, 5)),
        CastleSide::QueenSide => (Square::new(row, 0), Square::new(row, 3)),
    };

    let rook = next.board.piece_at(rook_from);
    debug_assert!(
        matches!(rook, Some(piece) if piece.kind == PieceKind::Rook),
        "castling without a rook on its original square"
    );
    next.board.set(rook_from, None);
    next.board.set(rook_to, rook);
}

#[cfg(test)]
mod tests {
    use super::{apply_move_copy, play_move};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> ChessMove {
        ChessMove::new(
            algebraic_to_square(from).expect("from square should parse"),
            algebraic_to_square(to).expect("to square should parse"),
        )
    }

    #[test]
    fn en_passant_capture_removes_the_bypassed_pawn() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("test FEN should parse");

        let next = play_move(&game, &mv("e5", "d6")).expect("en-passant capture should be legal");

        let d6 = algebraic_to_square("d6").expect("d6 should parse");
        let d5 = algebraic_to_square("d5").expect("d5 should parse");
        assert_eq!(
            next.piece_at(d6).expect("capturing pawn should sit on d6").kind,
            PieceKind::Pawn
        );
        assert_eq!(next.piece_at(d5), None, "captured pawn leaves d5, not d6");
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn kingside_castling_relocates_the_rook() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("test FEN should parse");

        let next = play_move(&game, &mv("e1", "g1")).expect("castling should be legal");

        assert_eq!(
            next.piece_at(algebraic_to_square("g1").expect("g1 should parse"))
                .expect("king should land on g1")
                .kind,
            PieceKind::King
        );
        assert_eq!(
            next.piece_at(algebraic_to_square("f1").expect("f1 should parse"))
                .expect("rook should land on f1")
                .kind,
            PieceKind::Rook
        );
        assert_eq!(
            next.piece_at(algebraic_to_square("h1").expect("h1 should parse")),
            None
        );
        assert_eq!(next.castling_rights, 0);
    }

    #[test]
    fn king_and_rook_moves_clear_the_matching_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");

        let after_king = apply_move_copy(&game, &mv("e1", "e2"));
        assert_eq!(after_king.castling_rights, 0b1100);

        let after_rook = apply_move_copy(&game, &mv("a1", "a5"));
        assert_eq!(after_rook.castling_rights, 0b1101);
    }

    #[test]
    fn capturing_a_rook_on_its_home_square_clears_the_opponent_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");

        let mut capture = mv("a1", "a8");
        capture.capture = true;
        let next = apply_move_copy(&game, &capture);
        // White queenside (a1 rook moved) and black queenside (a8 rook taken).
        assert_eq!(next.castling_rights, 0b0101);
    }

    #[test]
    fn double_push_sets_the_en_passant_target() {
        let game = GameState::new_game();
        let next = play_move(&game, &mv("e2", "e4")).expect("1.e4 should be legal");
        assert_eq!(
            next.en_passant_square,
            Some(algebraic_to_square("e3").expect("e3 should parse"))
        );

        let reply = play_move(&next, &mv("g8", "f6")).expect("1...Nf6 should be legal");
        assert_eq!(reply.en_passant_square, None, "target lasts exactly one move");
    }

    #[test]
    fn clocks_and_history_advance_only_through_play_move() {
        let game = GameState::new_game();

        let after_knight = play_move(&game, &mv("g1", "f3")).expect("1.Nf3 should be legal");
        assert_eq!(after_knight.halfmove_clock, 1);
        assert_eq!(after_knight.fullmove_number, 1);
        assert_eq!(after_knight.position_history.len(), 1);
        assert_eq!(after_knight.position_history[0], after_knight.get_fen());

        let after_reply = play_move(&after_knight, &mv("b8", "c6")).expect("1...Nc6 should be legal");
        assert_eq!(after_reply.halfmove_clock, 2);
        assert_eq!(after_reply.fullmove_number, 2);
        assert_eq!(after_reply.position_history.len(), 2);
    }

    #[test]
    fn illegal_and_post_terminal_moves_are_rejected() {
        let game = GameState::new_game();
        assert_eq!(
            play_move(&game, &mv("e2", "e5")).expect_err("e2-e5 should be rejected"),
            ChessError::IllegalMove
        );
        assert_eq!(
            play_move(&game, &mv("e7", "e5")).expect_err("moving black's pawn should be rejected"),
            ChessError::IllegalMove
        );

        let mated = GameState::from_fen("7k/6Q1/7K/8/8/8/8/8 b - - 0 1")
            .expect("mate FEN should parse");
        assert_eq!(
            play_move(&mated, &mv("h8", "h7")).expect_err("moving after mate should be rejected"),
            ChessError::GameAlreadyOver
        );
    }

    #[test]
    fn promotion_requires_and_applies_the_chosen_piece() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("test FEN should parse");

        assert_eq!(
            play_move(&game, &mv("a7", "a8")).expect_err("bare back-rank push should be rejected"),
            ChessError::IllegalMove
        );

        let promote = ChessMove::with_promotion(
            algebraic_to_square("a7").expect("a7 should parse"),
            algebraic_to_square("a8").expect("a8 should parse"),
            false,
            PieceKind::Knight,
        );
        let next = play_move(&game, &promote).expect("knight promotion should be legal");
        assert_eq!(
            next.piece_at(Square::new(0, 0))
                .expect("promoted piece should sit on a8")
                .kind,
            PieceKind::Knight
        );
    }
}
