//! Attack and check primitives.
//!
//! `is_square_attacked` scans outward from the target square over every
//! attack pattern (pawn attack diagonals only, never pushes), which yields
//! the same result as scanning all enemy pseudo-legal attacks without
//! generating them.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::sliding_moves::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// Locates the king of `color`, if present.
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .board
        .occupied()
        .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    match king_square(game_state, color) {
        Some(square) => is_square_attacked(game_state, square, color.opposite()),
        None => false,
    }
}

pub fn is_square_attacked(game_state: &GameState, square: Square, by_color: Color) -> bool {
    // Pawns attack one row toward their movement direction, so an attacking
    // pawn sits one row against that direction from the target square.
    let pawn_row_delta = -by_color.pawn_direction();
    for col_delta in [-1i8, 1i8] {
        if let Some(from) = square.offset(pawn_row_delta, col_delta) {
            if holds(game_state, from, by_color, PieceKind::Pawn) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in KNIGHT_OFFSETS {
        if let Some(from) = square.offset(row_delta, col_delta) {
            if holds(game_state, from, by_color, PieceKind::Knight) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in KING_OFFSETS {
        if let Some(from) = square.offset(row_delta, col_delta) {
            if holds(game_state, from, by_color, PieceKind::King) {
                return true;
            }
        }
    }

    ray_hits(game_state, square, by_color, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
        || ray_hits(game_state, square, by_color, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook)
}

fn holds(game_state: &GameState, square: Square, color: Color, kind: PieceKind) -> bool {
    matches!(
        game_state.board.piece_at(square),
        Some(piece) if piece.color == color && piece.kind == kind
    )
}

/// Walks each ray until the first occupant; a hit is `slider` or a queen.
fn ray_hits(
    game_state: &GameState,
    square: Square,
    by_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(row_delta, col_delta) in directions {
        let mut current = square;
        while let Some(next) = current.offset(row_delta, col_delta) {
            match game_state.board.piece_at(next) {
                None => current = next,
                Some(piece) => {
                    if piece.color == by_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}
