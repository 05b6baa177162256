//! Pseudo-legal bishop move generation.

use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{slide_moves, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(bishop) = game_state.board.piece_at(from) else {
        return;
    };
    if bishop.kind != PieceKind::Bishop {
        return;
    }

    slide_moves(game_state, from, bishop.color, &DIAGONAL_DIRECTIONS, out);
}
