//! GameState-to-FEN serializer.
//!
//! Exact inverse of the parser: serializing a parsed FEN reproduces the
//! input string byte for byte, including `-` placeholders. Position history
//! and repetition bookkeeping rely on that identity.

use crate::game_state::chess_types::{
    CastlingRights, Color, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = game_state.board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    if rights == 0 {
        return "-".to_owned();
    }

    let mut out = String::new();
    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }
    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    match square {
        Some(sq) => square_to_algebraic(sq),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    const ROUND_TRIP_CASES: &[&str] = &[
        STARTING_POSITION_FEN,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "7k/6Q1/7K/8/8/8/8/8 b - - 0 1",
        "8/8/8/3pP3/8/8/8/8 w - d6 0 1",
        "4k3/8/8/8/8/8/8/4K2R w K - 31 17",
    ];

    #[test]
    fn serialization_is_the_exact_inverse_of_parsing() {
        for fen in ROUND_TRIP_CASES {
            let game = parse_fen(fen).expect("round-trip FEN should parse");
            assert_eq!(&generate_fen(&game), fen);
        }
    }

    #[test]
    fn parsing_a_generated_fen_reproduces_the_state() {
        for fen in ROUND_TRIP_CASES {
            let game = parse_fen(fen).expect("round-trip FEN should parse");
            let reparsed = parse_fen(&game.get_fen()).expect("generated FEN should parse");
            assert_eq!(reparsed, game);
        }
    }
}
