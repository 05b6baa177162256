//! Engine abstraction layer.
//!
//! Hosts pick a move-selection strategy behind one trait so the search
//! engine and the diagnostic baselines are interchangeable.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move within the wall-clock budget. `None` only when the side
    /// to move has no legal moves.
    fn choose_move(&mut self, game_state: &GameState, movetime_ms: u64) -> Option<ChessMove>;
}
