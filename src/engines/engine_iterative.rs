//! The search-backed engine: iterative deepening within the time budget.

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::PositionalScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig, SearchResult};

#[derive(Debug, Default)]
pub struct IterativeEngine {
    scorer: PositionalScorer,
    pub last_result: Option<SearchResult>,
}

impl IterativeEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "Rowan Iterative"
    }

    fn choose_move(&mut self, game_state: &GameState, movetime_ms: u64) -> Option<ChessMove> {
        let config = SearchConfig {
            movetime_ms,
            ..SearchConfig::default()
        };
        let result = iterative_deepening_search(game_state, &self.scorer, config);
        self.last_result = Some(result);
        result.best_move
    }
}

#[cfg(test)]
mod tests {
    use super::IterativeEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::play_move;

    #[test]
    fn chosen_moves_commit_cleanly_through_play_move() {
        let game = GameState::new_game();
        let mut engine = IterativeEngine::new();

        let choice = engine
            .choose_move(&game, 100)
            .expect("the starting position has moves");
        let next = play_move(&game, &choice).expect("the engine's move should be legal");
        assert_eq!(next.position_history.len(), 1);

        let stats = engine.last_result.expect("search statistics should be kept");
        assert!(stats.reached_depth >= 1);
        assert!(stats.nodes > 0);
    }
}
