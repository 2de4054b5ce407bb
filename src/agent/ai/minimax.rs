// Minimax Search with Alpha-Beta Pruning
//
// Scores are always White minus Black, so instead of negamax's sign flip each
// node either maximizes or minimizes depending on who is to move there.
//
// Alpha-Beta Pruning:
// - alpha is the score the maximizing side is already guaranteed
// - beta is the score the minimizing side is already guaranteed
// - once beta <= alpha the remaining siblings cannot change the result
//
// The wall-clock deadline is polled after every explored move. When it has
// passed, the node returns the best score seen so far and every ancestor does
// the same, unwinding the whole tree. Each move is applied through a
// ScopedMove guard, so the position is restored on every return path.

use super::evaluation::{Evaluator, Score, SCORE_INFINITY};
use super::move_filter::antichess_moves;
use crate::game_repr::{Color, Rules, ScopedMove};
use std::time::{Duration, Instant};

/// Budget and statistics shared by one search tree.
///
/// The deadline is fixed when the context is created and never reset while
/// the tree is being explored.
#[derive(Debug, Clone)]
pub struct SearchContext {
    deadline: Option<Instant>,
    nodes: u64,
    aborted: bool,
}

impl SearchContext {
    /// Search that must return once `time_limit` has elapsed from now
    pub fn with_deadline(time_limit: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(time_limit),
            nodes: 0,
            aborted: false,
        }
    }

    /// Search without any time bound
    pub fn unbounded() -> Self {
        Self {
            deadline: None,
            nodes: 0,
            aborted: false,
        }
    }

    pub fn time_up(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Poll the deadline, recording the abort when it has passed
    pub fn check_deadline(&mut self) -> bool {
        if self.time_up() {
            self.aborted = true;
        }
        self.aborted
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Some node returned early because of the deadline
    pub fn aborted(&self) -> bool {
        self.aborted
    }
}

/// Alpha-beta search of `pos` to `depth` plies.
///
/// Nodes where `maximizer` is to move take the maximum of their children,
/// all others the minimum. Leaves (depth 0, finished games, nodes without
/// moves) are scored by `evaluator`.
///
/// Returns the best score found; after a deadline abort this only reflects
/// the moves explored before the abort.
pub fn alpha_beta<P, E>(
    pos: &mut P,
    evaluator: &E,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizer: Color,
    ctx: &mut SearchContext,
) -> Score
where
    P: Rules + ?Sized,
    E: Evaluator<P> + ?Sized,
{
    ctx.nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return evaluator.evaluate(pos);
    }

    let moves = antichess_moves(pos);
    if moves.is_empty() {
        return evaluator.evaluate(pos);
    }

    let maximizing = pos.side_to_move() == maximizer;
    let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

    for mv in moves {
        let score = {
            let mut child = ScopedMove::new(pos, mv);
            alpha_beta(&mut *child, evaluator, depth - 1, alpha, beta, maximizer, ctx)
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if ctx.check_deadline() {
            return best;
        }

        if beta <= alpha {
            break; // cut-off
        }
    }

    best
}

/// Plain minimax without pruning or deadline.
///
/// Visits the full tree; alpha-beta must always agree with it when no
/// deadline interferes.
pub fn minimax<P, E>(pos: &mut P, evaluator: &E, depth: u8, maximizer: Color) -> Score
where
    P: Rules + ?Sized,
    E: Evaluator<P> + ?Sized,
{
    if depth == 0 || pos.is_game_over() {
        return evaluator.evaluate(pos);
    }

    let moves = antichess_moves(pos);
    if moves.is_empty() {
        return evaluator.evaluate(pos);
    }

    let maximizing = pos.side_to_move() == maximizer;
    let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

    for mv in moves {
        let mut child = ScopedMove::new(pos, mv);
        let score = minimax(&mut *child, evaluator, depth - 1, maximizer);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}
