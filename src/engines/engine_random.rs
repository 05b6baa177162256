//! Random-move baseline engine.
//!
//! Selects uniformly from legal moves; used for diagnostics, integration
//! testing, and as a floor opponent for strength comparisons.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Rowan Random"
    }

    fn choose_move(&mut self, game_state: &GameState, _movetime_ms: u64) -> Option<ChessMove> {
        let moves = all_legal_moves(game_state);
        moves.choose(&mut rand::rng()).copied()
    }
}
