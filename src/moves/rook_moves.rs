//! Pseudo-legal rook move generation.

use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{slide_moves, ORTHOGONAL_DIRECTIONS};

pub fn rook_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(rook) = game_state.board.piece_at(from) else {
        return;
    };
    if rook.kind != PieceKind::Rook {
        return;
    }

    slide_moves(game_state, from, rook.color, &ORTHOGONAL_DIRECTIONS, out);
}
