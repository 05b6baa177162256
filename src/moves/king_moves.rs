//! Pseudo-legal king move generation, including castling candidates.
//!
//! Castling candidates are gated only on rights, the king standing on its
//! original square, and empty squares between king and rook. Attack safety
//! (not castling out of, through, or into check) is filtered downstream by
//! the legality engine; pseudo-legal generation is attack-oblivious.

use crate::game_state::chess_types::{
    CastleSide, ChessMove, Color, PieceKind, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(king) = game_state.board.piece_at(from) else {
        return;
    };
    if king.kind != PieceKind::King {
        return;
    }

    for (row_delta, col_delta) in KING_OFFSETS {
        let Some(to) = from.offset(row_delta, col_delta) else {
            continue;
        };

        match game_state.board.piece_at(to) {
            None => out.push(ChessMove::new(from, to)),
            Some(occupant) if occupant.color != king.color => {
                let mut mv = ChessMove::new(from, to);
                mv.capture = true;
                out.push(mv);
            }
            Some(_) => {}
        }
    }

    castling_candidates(game_state, from, king.color, out);
}

fn castling_candidates(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let back_row = color.back_row();
    if from != Square::new(back_row, 4) {
        return;
    }

    let (kingside_right, queenside_right) = match color {
        Color::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
        Color::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
    };

    if (game_state.castling_rights & kingside_right) != 0
        && path_is_empty(game_state, back_row, &[5, 6])
    {
        let mut mv = ChessMove::new(from, Square::new(back_row, 6));
        mv.castle = Some(CastleSide::KingSide);
        out.push(mv);
    }

    if (game_state.castling_rights & queenside_right) != 0
        && path_is_empty(game_state, back_row, &[1, 2, 3])
    {
        let mut mv = ChessMove::new(from, Square::new(back_row, 2));
        mv.castle = Some(CastleSide::QueenSide);
        out.push(mv);
    }
}

fn path_is_empty(game_state: &GameState, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| game_state.board.piece_at(Square::new(row, col)).is_none())
}
