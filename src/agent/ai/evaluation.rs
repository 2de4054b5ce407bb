// Position evaluation function
// Returns a score from White's point of view (positive = good for White).
// The search picks max or min by side to move, so no sign flipping happens here.

use super::config::EvalWeights;
use super::king_safety_tables::king_square_value;
use crate::game_repr::{BoardView, Color, Outcome, PieceKind, Rules};

pub type Score = i32;

/// Forced win for White. No heuristic sum comes anywhere near it.
pub const WIN_SCORE: Score = 100_000;
/// Forced win for Black
pub const LOSS_SCORE: Score = -WIN_SCORE;
pub const DRAW_SCORE: Score = 0;
/// Initial alpha-beta bound, strictly outside every reachable score
pub const SCORE_INFINITY: Score = WIN_SCORE + 1;

/// Static evaluation seam of the search.
///
/// Implemented by the heuristic evaluator for real boards and by fixtures
/// that score synthetic game trees in tests.
pub trait Evaluator<P: ?Sized> {
    fn evaluate(&self, pos: &P) -> Score;
}

/// Material, king safety, castling potential and check status
#[derive(Debug, Clone, Default)]
pub struct HeuristicEvaluator {
    pub weights: EvalWeights,
}

impl HeuristicEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl<P: Rules + BoardView + ?Sized> Evaluator<P> for HeuristicEvaluator {
    fn evaluate(&self, pos: &P) -> Score {
        evaluate(pos, &self.weights)
    }
}

/// Evaluate a position, White minus Black
pub fn evaluate<P: Rules + BoardView + ?Sized>(pos: &P, weights: &EvalWeights) -> Score {
    if let Some(outcome) = pos.outcome() {
        return terminal_score(outcome);
    }

    material_score(pos, weights)
        + king_safety_score(pos, weights)
        + castling_score(pos, weights)
        + check_score(pos, weights)
}

/// Sentinel for a finished game
pub fn terminal_score(outcome: Outcome) -> Score {
    match outcome.winner() {
        Some(Color::White) => WIN_SCORE,
        Some(Color::Black) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

pub(crate) fn material_score<P: BoardView + ?Sized>(pos: &P, weights: &EvalWeights) -> Score {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let diff = pos.piece_count(kind, Color::White) as Score
                - pos.piece_count(kind, Color::Black) as Score;
            diff * weights.piece_value(kind)
        })
        .sum()
}

/// Occupied squares around each king, plus the king table where it applies
pub(crate) fn king_safety_score<P: BoardView + ?Sized>(pos: &P, weights: &EvalWeights) -> Score {
    side_king_safety(pos, weights, Color::White) - side_king_safety(pos, weights, Color::Black)
}

fn side_king_safety<P: BoardView + ?Sized>(pos: &P, weights: &EvalWeights, color: Color) -> Score {
    let Some(king) = pos.king_square(color) else {
        return 0;
    };

    let occupied = king.neighbors().filter(|&sq| pos.is_occupied(sq)).count() as Score;
    let mut score = occupied * weights.king_neighbor_weight(color);

    if weights.uses_king_table(color) {
        score += king_square_value(&weights.king_table, king, color);
    }
    score
}

pub(crate) fn castling_score<P: BoardView + ?Sized>(pos: &P, weights: &EvalWeights) -> Score {
    let side = |color: Color| {
        let rights = pos.castling_rights(color);
        let mut score = 0;
        if rights.any() {
            score += weights.castling_any;
        }
        if rights.both() {
            score += weights.castling_both;
        }
        score
    };
    side(Color::White) - side(Color::Black)
}

/// Flat penalty on the mover being in check, not colour-differenced
pub(crate) fn check_score<P: Rules + ?Sized>(pos: &P, weights: &EvalWeights) -> Score {
    if pos.is_check() {
        weights.check_penalty
    } else {
        0
    }
}
