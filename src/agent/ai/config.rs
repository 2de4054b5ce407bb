// Engine tunables
//
// Evaluation weights and search limits travel together in an EngineConfig
// so tests and the CLI can substitute their own values.

use super::evaluation::Score;
use super::king_safety_tables::KING_SAFETY_TABLE;
use crate::game_repr::{Color, PieceKind};
use std::time::Duration;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Terms and weights of the static evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvalWeights {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    /// Bonus per occupied square next to the White king
    pub white_king_neighbor: Score,
    /// Bonus per occupied square next to the Black king
    pub black_king_neighbor: Score,
    /// King square values in White orientation (a1 = 0), mirrored for Black
    pub king_table: [Score; 64],
    pub apply_king_table_to_white: bool,
    /// Awarded when a side keeps at least one castling right
    pub castling_any: Score,
    /// Added on top of `castling_any` when both rights remain
    pub castling_both: Score,
    /// Applied when the side to move is in check, whichever colour that is
    pub check_penalty: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            pawn: 10,
            knight: 30,
            bishop: 30,
            rook: 50,
            queen: 90,
            white_king_neighbor: 2,
            black_king_neighbor: 1,
            king_table: KING_SAFETY_TABLE,
            apply_king_table_to_white: false,
            castling_any: 10,
            castling_both: 5,
            check_penalty: -500,
        }
    }
}

impl EvalWeights {
    pub fn piece_value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0,
        }
    }

    pub fn king_neighbor_weight(&self, color: Color) -> Score {
        match color {
            Color::White => self.white_king_neighbor,
            Color::Black => self.black_king_neighbor,
        }
    }

    /// Whether the king table contributes to `color`'s king safety
    pub fn uses_king_table(&self, color: Color) -> bool {
        match color {
            Color::White => self.apply_king_table_to_white,
            Color::Black => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Deepen 1, 2, ... and keep the deepest pass the deadline allowed to finish
    #[default]
    IterativeDeepening,
    /// One pass at the adaptive depth; a deadline abort returns whatever was found
    FixedDepth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub time_limit: Duration,
    pub strategy: SearchStrategy,
    /// Replaces the adaptive depth when set
    pub depth_override: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            strategy: SearchStrategy::default(),
            depth_override: None,
        }
    }
}

impl SearchConfig {
    /// Search depth for a root with `candidates` moves.
    ///
    /// Fewer candidates mean a narrower tree, so the same time buys more depth.
    pub fn depth_for(&self, candidates: usize) -> u8 {
        if let Some(depth) = self.depth_override {
            return depth;
        }
        match candidates {
            0..=5 => 4,
            6..=8 => 3,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub eval: EvalWeights,
    pub search: SearchConfig,
}

impl EngineConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.search.time_limit = time_limit;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search.depth_override = Some(depth);
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search.strategy = strategy;
        self
    }
}
