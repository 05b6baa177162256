//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, then filters moves that
//! would leave the mover's own king in check. Castle candidates get the
//! three-point attack test here (not in check now, transit square safe,
//! destination safe); rook-path emptiness was a generation-time precondition.

use crate::game_state::chess_types::{CastleSide, ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_copy;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudo-legal moves for the piece on `from`, regardless of whose turn it is.
pub fn pseudo_legal_moves_from(game_state: &GameState, from: Square) -> Vec<ChessMove> {
    let mut out = Vec::new();
    let Some(piece) = game_state.board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(game_state, from, &mut out),
        PieceKind::Knight => knight_moves(game_state, from, &mut out),
        PieceKind::Bishop => bishop_moves(game_state, from, &mut out),
        PieceKind::Rook => rook_moves(game_state, from, &mut out),
        PieceKind::Queen => queen_moves(game_state, from, &mut out),
        PieceKind::King => king_moves(game_state, from, &mut out),
    }

    out
}

/// Legal moves for the side to move from one square; empty for opponent
/// pieces and empty squares.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<ChessMove> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let pseudo = pseudo_legal_moves_from(game_state, from);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        if let Some(side) = mv.castle {
            if castle_is_safe(game_state, &mv, side) {
                legal.push(mv);
            }
            continue;
        }

        let next = apply_move_copy(game_state, &mv);
        if !is_king_in_check(&next, piece.color) {
            legal.push(mv);
        }
    }

    legal
}

/// All legal moves for the side to move. Called at every search node; the
/// dominant cost driver of the engine.
pub fn all_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(48);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            match game_state.board.piece_at(from) {
                Some(piece) if piece.color == game_state.side_to_move => {
                    out.extend(legal_moves_from(game_state, from));
                }
                _ => {}
            }
        }
    }

    out
}

fn castle_is_safe(game_state: &GameState, mv: &ChessMove, side: CastleSide) -> bool {
    let enemy = game_state.side_to_move.opposite();
    let transit_col = match side {
        CastleSide::KingSide => 5,
        CastleSide::QueenSide => 3,
    };
    let transit = Square::new(mv.from.row, transit_col);

    !is_square_attacked(game_state, mv.from, enemy)
        && !is_square_attacked(game_state, transit, enemy)
        && !is_square_attacked(game_state, mv.to, enemy)
}
