//! ASCII board renderer for debugging and test output.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        out.push(char::from(b'8' - row));
        out.push(' ');
        for col in 0..8u8 {
            let cell = match game_state.board.piece_at(Square::new(row, col)) {
                Some(piece) => piece.fen_char(),
                None => '.',
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");

    out
}
