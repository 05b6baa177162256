//! Pseudo-legal knight move generation.

use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(knight) = game_state.board.piece_at(from) else {
        return;
    };
    if knight.kind != PieceKind::Knight {
        return;
    }

    for (row_delta, col_delta) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(row_delta, col_delta) else {
            continue;
        };

        match game_state.board.piece_at(to) {
            None => out.push(ChessMove::new(from, to)),
            Some(occupant) if occupant.color != knight.color => {
                let mut mv = ChessMove::new(from, to);
                mv.capture = true;
                out.push(mv);
            }
            Some(_) => {}
        }
    }
}
