// AI Agent - Minimax with Alpha-Beta Pruning for antichess
//
// Captures are compulsory, so every search node only considers the
// antichess move set. Key features:
// - Deterministic (same position and config always give the same move)
// - Adaptive depth from the number of root candidates
// - Forced-check shortcut at the root
// - Wall-clock deadline with iterative deepening

pub mod config;
pub mod engine_player;
pub mod evaluation;
pub mod king_safety_tables;
pub mod minimax;
pub mod move_filter;
pub mod search;

#[cfg(test)]
mod tests;

pub use config::{EngineConfig, EvalWeights, SearchConfig, SearchStrategy, DEFAULT_TIME_LIMIT};
pub use engine_player::EnginePlayer;
pub use evaluation::{
    evaluate, terminal_score, Evaluator, HeuristicEvaluator, Score, DRAW_SCORE, LOSS_SCORE,
    SCORE_INFINITY, WIN_SCORE,
};
pub use minimax::{alpha_beta, minimax, SearchContext};
pub use move_filter::{antichess_moves, is_antichess_legal, validate_move};
pub use search::{MoveSelector, SearchResult};
