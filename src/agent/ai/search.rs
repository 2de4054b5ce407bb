// Root Move Selection
//
// Picks the move to play for one engine turn:
// 1. restrict the candidates to antichess-legal moves
// 2. play the first checking move without searching, if there is one
// 3. choose a depth from the number of candidates
// 4. score every candidate with alpha-beta under a shared deadline
//
// With iterative deepening (the default) step 4 is repeated at depth 1, 2, ...
// and only passes that finished before the deadline are kept.

use super::config::{EngineConfig, SearchConfig, SearchStrategy};
use super::evaluation::{Evaluator, HeuristicEvaluator, Score, SCORE_INFINITY, WIN_SCORE};
use super::minimax::{alpha_beta, SearchContext};
use super::move_filter::antichess_moves;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Color, Rules, ScopedMove};
use log::{debug, info, warn};
use std::fmt;
use std::time::Instant;

/// Result of a move selection
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// Score of `best_move`, White minus Black
    pub score: Score,
    /// Depth of the pass the move comes from (0 for the forced-check shortcut)
    pub depth: u8,
    /// False when the pass was cut short by the deadline
    pub completed: bool,
    pub forced_check: bool,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Outcome of scoring every root candidate once
struct RootPass<M> {
    best_move: M,
    score: Score,
    completed: bool,
}

/// Chooses engine moves for any position implementing `Rules`.
///
/// The evaluator is a type parameter so the same selector drives real boards
/// with the heuristic evaluator and synthetic trees in tests.
#[derive(Debug, Clone)]
pub struct MoveSelector<E = HeuristicEvaluator> {
    config: SearchConfig,
    evaluator: E,
}

impl MoveSelector<HeuristicEvaluator> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.search,
            evaluator: HeuristicEvaluator::new(config.eval),
        }
    }
}

impl Default for MoveSelector<HeuristicEvaluator> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<E> MoveSelector<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Best move for `mover`
    pub fn select_move<P>(&self, pos: &mut P, mover: Color) -> EngineResult<P::Move>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        self.search(pos, mover).map(|result| result.best_move)
    }

    /// Run a full move selection and report its statistics.
    ///
    /// `pos` is left exactly as it was passed in. Returns
    /// `EngineError::NoLegalMoves` when the game is already over.
    pub fn search<P>(&self, pos: &mut P, mover: Color) -> EngineResult<SearchResult<P::Move>>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        let start_time = Instant::now();

        if pos.side_to_move() != mover {
            warn!(
                "selecting a move for {} but {} is to move",
                mover,
                pos.side_to_move()
            );
        }

        let candidates = antichess_moves(pos);
        let Some(&first) = candidates.first() else {
            return Err(EngineError::NoLegalMoves);
        };

        if let Some(&mv) = candidates.iter().find(|&&mv| pos.gives_check(mv)) {
            let score = {
                let child = ScopedMove::new(pos, mv);
                self.evaluator.evaluate(&*child)
            };
            debug!("forced check shortcut: {}", mv);
            return Ok(SearchResult {
                best_move: mv,
                score,
                depth: 0,
                completed: true,
                forced_check: true,
                nodes_searched: 0,
                time_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        let max_depth = self.config.depth_for(candidates.len()).max(1);
        let mut ctx = SearchContext::with_deadline(self.config.time_limit);

        let (pass, depth) = match self.config.strategy {
            SearchStrategy::FixedDepth => {
                let pass = self.root_pass(pos, &candidates, first, max_depth, mover, &mut ctx);
                (pass, max_depth)
            }
            SearchStrategy::IterativeDeepening => {
                let pass = self.root_pass(pos, &candidates, first, 1, mover, &mut ctx);
                log_pass(1, &pass, &ctx, start_time);
                let mut kept = (pass, 1);

                for depth in 2..=max_depth {
                    if !kept.0.completed || kept.0.score.abs() >= WIN_SCORE {
                        break;
                    }
                    if ctx.time_up() {
                        debug!("deadline reached before depth {}", depth);
                        break;
                    }

                    let pass = self.root_pass(pos, &candidates, first, depth, mover, &mut ctx);
                    if !pass.completed {
                        debug!("depth {} aborted by deadline, keeping depth {}", depth, kept.1);
                        break;
                    }
                    log_pass(depth, &pass, &ctx, start_time);
                    kept = (pass, depth);
                }

                kept
            }
        };

        Ok(SearchResult {
            best_move: pass.best_move,
            score: pass.score,
            depth,
            completed: pass.completed,
            forced_check: false,
            nodes_searched: ctx.nodes(),
            time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// Score each candidate at `depth` and keep the best for `mover`.
    ///
    /// Only strict improvements replace the current best, so equal scores
    /// keep the earliest candidate.
    fn root_pass<P>(
        &self,
        pos: &mut P,
        candidates: &[P::Move],
        fallback: P::Move,
        depth: u8,
        mover: Color,
        ctx: &mut SearchContext,
    ) -> RootPass<P::Move>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        let maximizing = mover.is_white();
        let mut best_score = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        let mut best_move = None;

        for (i, &mv) in candidates.iter().enumerate() {
            let score = {
                let mut child = ScopedMove::new(pos, mv);
                alpha_beta(
                    &mut *child,
                    &self.evaluator,
                    depth,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    Color::White,
                    ctx,
                )
            };

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }

            if ctx.aborted() || (i + 1 < candidates.len() && ctx.check_deadline()) {
                break;
            }
        }

        RootPass {
            best_move: best_move.unwrap_or(fallback),
            score: best_score,
            completed: !ctx.aborted(),
        }
    }
}

fn log_pass<M: fmt::Display>(
    depth: u8,
    pass: &RootPass<M>,
    ctx: &SearchContext,
    start_time: Instant,
) {
    info!(
        "depth {} score {} nodes {} time {}ms best {}",
        depth,
        pass.score,
        ctx.nodes(),
        start_time.elapsed().as_millis(),
        pass.best_move
    );
}
