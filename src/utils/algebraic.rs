//! Conversions between algebraic coordinates (e.g. `e4`) and `Square`.
//!
//! The mapping is pure and bijective; the FEN codec and the CLI host reuse
//! it for en-passant fields and move input/output.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    // Rank 8 is row 0, so ranks count down while rows count up.
    let col = file - b'a';
    let row = b'8' - rank;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}
