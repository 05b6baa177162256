//! Pseudo-legal queen move generation: bishop rays plus rook rays.

use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{slide_moves, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn queen_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(queen) = game_state.board.piece_at(from) else {
        return;
    };
    if queen.kind != PieceKind::Queen {
        return;
    }

    slide_moves(game_state, from, queen.color, &DIAGONAL_DIRECTIONS, out);
    slide_moves(game_state, from, queen.color, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn open_board_queen_covers_all_eight_rays() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let from = algebraic_to_square("d4").expect("d4 should parse");
        let mut out = Vec::new();
        queen_moves(&game, from, &mut out);

        // 13 diagonal targets plus 14 orthogonal targets from d4.
        assert_eq!(out.len(), 27);
    }
}
