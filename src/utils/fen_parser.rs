//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string. The parser is hardened: malformed input (wrong field count,
//! unknown piece letter, rank not summing to 8 files, bad clocks) yields
//! `ChessError::MalformedFen` instead of panicking.

use crate::errors::ChessError;
use crate::game_state::chess_types::{
    CastlingRights, Color, Piece, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side-to-move"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| malformed("missing en-passant square"))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| malformed("missing halfmove clock"))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| malformed("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("invalid halfmove clock '{halfmove_part}'")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("invalid fullmove number '{fullmove_part}'")))?;

    Ok(game_state)
}

fn malformed(msg: &str) -> ChessError {
    ChessError::MalformedFen(msg.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("board layout must contain 8 ranks"));
    }

    // FEN lists ranks top-down, which is exactly our row order.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(malformed("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| malformed(&format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(malformed("board rank has too many files"));
            }

            game_state.board.set(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(malformed("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(malformed(&format!("invalid side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(malformed(&format!("invalid castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(ChessError::MalformedFen)
}
