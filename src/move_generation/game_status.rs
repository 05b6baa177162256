//! Terminal-state oracle: checkmate, stalemate, and the draw conditions.
//!
//! Recomputed per query from a single `GameState`; there is no persistent
//! automaton. `play_move` consults `game_status` to refuse moves once a
//! terminal state is reached.

use crate::game_state::chess_rules::FIFTY_MOVE_RULE_HALFMOVES;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Draw,
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    if is_checkmate(game_state) {
        GameStatus::Checkmate
    } else if is_draw(game_state) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
        && all_legal_moves(game_state).is_empty()
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_king_in_check(game_state, game_state.side_to_move)
        && all_legal_moves(game_state).is_empty()
}

pub fn is_fifty_move_rule(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES
}

/// Threefold repetition is not implemented: `play_move` tracks position
/// history, but nothing counts repeats yet, matching the behavior the rest
/// of the engine was tuned against.
pub fn is_threefold_repetition(_game_state: &GameState) -> bool {
    false
}

pub fn is_draw(game_state: &GameState) -> bool {
    is_stalemate(game_state)
        || is_insufficient_material(game_state)
        || is_fifty_move_rule(game_state)
        || is_threefold_repetition(game_state)
}

/// True for bare kings, a lone minor piece versus a bare king, and
/// same-colored lone bishops. Any pawn, rook, or queen on the board means
/// mating material remains.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut white_minors: Vec<(PieceKind, Square)> = Vec::new();
    let mut black_minors: Vec<(PieceKind, Square)> = Vec::new();

    for (square, piece) in game_state.board.occupied() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => match piece.color {
                Color::White => white_minors.push((piece.kind, square)),
                Color::Black => black_minors.push((piece.kind, square)),
            },
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match (white_minors.as_slice(), black_minors.as_slice()) {
        ([], []) => true,
        ([_], []) | ([], [_]) => true,
        ([(PieceKind::Bishop, white_sq)], [(PieceKind::Bishop, black_sq)]) => {
            white_sq.parity() == black_sq.parity()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        game_status, is_checkmate, is_draw, is_fifty_move_rule, is_insufficient_material,
        is_stalemate, GameStatus,
    };
    use crate::game_state::game_state::GameState;

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn back_rank_queen_mate_is_checkmate() {
        let game = state("7k/6Q1/7K/8/8/8/8/8 b - - 0 1");
        assert!(is_checkmate(&game));
        assert_eq!(game_status(&game), GameStatus::Checkmate);
    }

    #[test]
    fn check_with_an_escape_square_is_not_checkmate() {
        let game = state("7k/8/5Q1K/8/8/8/8/8 b - - 0 1");
        assert!(!is_checkmate(&game));
        assert_eq!(game_status(&game), GameStatus::Ongoing);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let game = state("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(is_stalemate(&game));
        assert!(!is_checkmate(&game));
        assert_eq!(game_status(&game), GameStatus::Draw);
    }

    #[test]
    fn insufficient_material_cases() {
        // Bare kings.
        assert!(is_insufficient_material(&state("8/8/8/8/8/8/8/Kk6 w - - 0 1")));
        // Lone minor versus bare king.
        assert!(is_insufficient_material(&state("8/8/8/B7/8/8/8/Kk6 w - - 0 1")));
        assert!(is_insufficient_material(&state("8/8/8/7n/8/8/8/Kk6 w - - 0 1")));
        // Opposite-colored bishops can still mate together.
        assert!(!is_insufficient_material(&state("8/8/8/Bb6/8/8/8/Kk6 w - - 0 1")));
        // Same-colored bishops cannot.
        assert!(is_insufficient_material(&state("8/8/8/B1b5/8/8/8/Kk6 w - - 0 1")));
        // A rook is mating material.
        assert!(!is_insufficient_material(&state("8/8/8/R7/8/8/8/Kk6 w - - 0 1")));
        // A single pawn is mating material.
        assert!(!is_insufficient_material(&state("8/8/8/P7/8/8/8/Kk6 w - - 0 1")));
        // Two knights on one side do not qualify.
        assert!(!is_insufficient_material(&state("8/8/8/NN6/8/8/8/Kk6 w - - 0 1")));
    }

    #[test]
    fn fifty_move_rule_triggers_at_one_hundred_half_moves() {
        assert!(!is_fifty_move_rule(&state("7k/8/8/8/8/8/8/7K w - - 99 80")));
        assert!(is_fifty_move_rule(&state("7k/8/8/8/8/8/8/7K w - - 100 80")));
        assert!(is_fifty_move_rule(&state("7k/8/8/8/8/8/8/7K w - - 150 99")));
    }

    #[test]
    fn draw_aggregates_every_condition() {
        assert!(is_draw(&state("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")));
        assert!(is_draw(&state("8/8/8/8/8/8/8/Kk6 w - - 0 1")));
        assert!(is_draw(&state("7k/8/8/8/8/8/8/7K w - - 100 80")));
        assert!(!is_draw(&GameState::new_game()));
    }

    #[test]
    fn status_queries_are_idempotent() {
        let game = state("7k/6Q1/7K/8/8/8/8/8 b - - 0 1");
        assert_eq!(game_status(&game), game_status(&game));
        assert_eq!(is_draw(&game), is_draw(&game));
    }
}
