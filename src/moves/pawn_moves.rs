//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes, diagonal captures, en-passant captures, and the
//! four-way promotion fan-out when a move reaches the far rank.

use crate::game_state::chess_types::{ChessMove, PieceKind, Square};
use crate::game_state::game_state::GameState;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub fn pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(pawn) = game_state.board.piece_at(from) else {
        return;
    };
    if pawn.kind != PieceKind::Pawn {
        return;
    }

    let direction = pawn.color.pawn_direction();
    let promotion_row = pawn.color.promotion_row();

    if let Some(to) = from.offset(direction, 0) {
        if game_state.board.piece_at(to).is_none() {
            push_pawn_move(from, to, false, promotion_row, out);

            if from.row == pawn.color.pawn_home_row() {
                // Double push: both intermediate and target must be empty.
                if let Some(two) = to.offset(direction, 0) {
                    if game_state.board.piece_at(two).is_none() {
                        out.push(ChessMove::new(from, two));
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, col_delta) else {
            continue;
        };

        match game_state.board.piece_at(to) {
            Some(occupant) if occupant.color != pawn.color => {
                push_pawn_move(from, to, true, promotion_row, out);
            }
            None if game_state.en_passant_square == Some(to) => {
                let mut mv = ChessMove::new(from, to);
                mv.capture = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn push_pawn_move(from: Square, to: Square, capture: bool, promotion_row: u8, out: &mut Vec<ChessMove>) {
    if to.row == promotion_row {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::with_promotion(from, to, capture, kind));
        }
    } else {
        let mut mv = ChessMove::new(from, to);
        mv.capture = capture;
        out.push(mv);
    }
}
