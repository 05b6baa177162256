//! Time-bounded iterative deepening search.
//!
//! Negamax with fail-hard alpha-beta pruning and a quiescence extension at
//! the horizon, driven depth by depth under a wall-clock budget. The clock
//! is polled before each depth iteration and between root moves; a recursion
//! already in flight is never interrupted, so the budget can overshoot by
//! one leaf-to-root unwind.

use std::time::{Duration, Instant};

use crate::game_state::chess_rules::FIFTY_MOVE_RULE_HALFMOVES;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::advance_position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::move_ordering::order_moves;

pub const MATE_SCORE: i32 = 1_000_000;
const INFINITY: i32 = 2_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub movetime_ms: u64,
    /// Safety valve; the time budget is the intended stop condition.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movetime_ms: 1_000,
            max_depth: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Best legal move under a wall-clock budget. `None` only when the side to
/// move has no legal moves at all.
pub fn find_best_move(game_state: &GameState, movetime_ms: u64) -> Option<ChessMove> {
    let config = SearchConfig {
        movetime_ms,
        ..SearchConfig::default()
    };
    iterative_deepening_search(game_state, &PositionalScorer, config).best_move
}

pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let deadline = started_at + Duration::from_millis(config.movetime_ms.max(1));

    let mut root_moves = all_legal_moves(game_state);
    let mut result = SearchResult::default();
    if root_moves.is_empty() {
        result.elapsed_ms = started_at.elapsed().as_millis() as u64;
        return result;
    }
    order_moves(&mut root_moves, &game_state.board);

    let mut nodes = 0u64;
    let mut best: Option<(ChessMove, i32)> = None;

    for depth in 1..=config.max_depth.max(1) {
        if Instant::now() >= deadline {
            break;
        }

        // Principal-variation move first: makes the re-search at the next
        // depth cheap because the best line fails high immediately.
        if let Some((pv_move, _)) = best {
            if let Some(pos) = root_moves.iter().position(|mv| *mv == pv_move) {
                let mv = root_moves.remove(pos);
                root_moves.insert(0, mv);
            }
        }

        match search_root(game_state, scorer, &root_moves, depth, deadline, &mut nodes) {
            RootOutcome::Completed(mv, score) => {
                best = Some((mv, score));
                result.reached_depth = depth;
            }
            RootOutcome::Interrupted(partial) => {
                // A cut-short iteration searched a prefix of the move list
                // only; trust it just when nothing deeper ever finished.
                if best.is_none() {
                    best = partial;
                }
                break;
            }
        }
    }

    if let Some((mv, score)) = best {
        result.best_move = Some(mv);
        result.best_score = score;
    }
    result.nodes = nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

enum RootOutcome {
    Completed(ChessMove, i32),
    Interrupted(Option<(ChessMove, i32)>),
}

fn search_root<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    root_moves: &[ChessMove],
    depth: u8,
    deadline: Instant,
    nodes: &mut u64,
) -> RootOutcome {
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(ChessMove, i32)> = None;

    for (index, mv) in root_moves.iter().enumerate() {
        // The first root move is always searched so a partial scan still
        // yields a legal answer even on a tiny budget.
        if index > 0 && Instant::now() >= deadline {
            return RootOutcome::Interrupted(best);
        }

        let next = advance_position(game_state, mv);
        let score = -negamax(&next, scorer, -beta, -alpha, depth - 1, nodes);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    match best {
        Some((mv, score)) => RootOutcome::Completed(mv, score),
        None => RootOutcome::Interrupted(None),
    }
}

fn negamax<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // The fifty-move draw dominates everything else at this node, even a
    // mate that would otherwise be scored here.
    if game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
        return 0;
    }

    let mut moves = all_legal_moves(game_state);
    if moves.is_empty() {
        return if is_king_in_check(game_state, game_state.side_to_move) {
            -MATE_SCORE
        } else {
            0
        };
    }
    order_moves(&mut moves, &game_state.board);

    if depth == 0 {
        return quiescence(game_state, scorer, alpha, beta, Some(moves), nodes);
    }

    for mv in &moves {
        let next = advance_position(game_state, mv);
        let score = -negamax(&next, scorer, -beta, -alpha, depth - 1, nodes);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Resolves capture sequences past the horizon so the static evaluation is
/// never trusted mid-exchange.
fn quiescence<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    mut alpha: i32,
    beta: i32,
    moves: Option<Vec<ChessMove>>,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
        return 0;
    }

    let moves = match moves {
        Some(moves) => moves,
        None => {
            let mut generated = all_legal_moves(game_state);
            order_moves(&mut generated, &game_state.board);
            generated
        }
    };
    if moves.is_empty() {
        return if is_king_in_check(game_state, game_state.side_to_move) {
            -MATE_SCORE
        } else {
            0
        };
    }

    let stand_pat = scorer.score(game_state);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    for mv in moves.iter().filter(|mv| mv.capture) {
        let next = advance_position(game_state, mv);
        let score = -quiescence(&next, scorer, -beta, -alpha, None, nodes);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
