//! Error types for the antichess engine
//!
//! Ordinary search outcomes (deadline expiry, wins, losses, draws) are never
//! errors. These variants cover caller-contract violations and bad input
//! coming from the harness.

use thiserror::Error;

/// Errors surfaced by the engine and its harness
#[derive(Error, Debug)]
pub enum EngineError {
    /// Move selection was requested for a position with no legal moves
    #[error("no legal moves available: the game is already over")]
    NoLegalMoves,

    /// A well-formed move that is not antichess-legal in the current position
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Move text that is not UCI long algebraic notation
    #[error("could not parse move text {text:?}")]
    InvalidMoveText { text: String },

    /// Square text outside a1..h8
    #[error("invalid square {text:?}")]
    InvalidSquare { text: String },

    /// FEN rejected by the rules engine
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move input ended before a legal move was read
    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
