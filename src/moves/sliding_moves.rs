//! Shared ray-casting for the sliding pieces.
//!
//! A ray stops at the first occupied square, which is included as a capture
//! when the occupant belongs to the other side.

use crate::game_state::chess_types::{ChessMove, Color, Square};
use crate::game_state::game_state::GameState;

pub fn slide_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = from;
        while let Some(to) = current.offset(row_delta, col_delta) {
            match game_state.board.piece_at(to) {
                None => {
                    out.push(ChessMove::new(from, to));
                    current = to;
                }
                Some(occupant) => {
                    if occupant.color != mover_color {
                        let mut mv = ChessMove::new(from, to);
                        mv.capture = true;
                        out.push(mv);
                    }
                    break;
                }
            }
        }
    }
}

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
