//! Player trait and associated types for antichess game agents.
//!
//! This module provides the core abstraction for entities that can provide moves.
//! The engine and a console user both implement the `Player` trait to take part in
//! games run by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. An
//! `EnginePlayer` needs an engine configuration, a `ConsolePlayer` needs an input
//! and an output stream, so each implementation provides its own constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks: the console player waits for a line of input and the
//! engine player for its search to finish. The orchestrator simply calls it and
//! waits for the result.

use crate::board::Board;
use crate::error::EngineResult;
use crate::game_repr::{Color, Outcome};
use chess::ChessMove;
use std::fmt;

/// Result of a completed antichess game.
///
/// Passed to players via `game_ended()` and returned by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Stalemate, insufficient material, seventy-five moves or fivefold repetition
    Draw,
    /// Fifty moves claimed by the harness
    DrawByFiftyMoves,
    /// Threefold repetition claimed by the harness
    DrawByRepetition,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome.winner() {
            Some(winner) => Self::from_winner(winner),
            None => GameResult::Draw,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => f.write_str("White wins"),
            GameResult::BlackWins => f.write_str("Black wins"),
            GameResult::Draw => f.write_str("Draw"),
            GameResult::DrawByFiftyMoves => f.write_str("Draw by the fifty-move rule"),
            GameResult::DrawByRepetition => f.write_str("Draw by threefold repetition"),
        }
    }
}

/// Trait for entities that can provide antichess moves.
///
/// Only `get_move()` must be implemented. All other methods have default
/// implementations that do nothing.
pub trait Player {
    /// Request the next move from this player.
    ///
    /// Called when it is this player's turn; `color` is the side it plays.
    /// The board is lent mutably so a search can push and pop moves on it, but
    /// it must be returned in the same position. The returned move must be
    /// antichess-legal; the orchestrator plays it as is.
    ///
    /// # Errors
    ///
    /// Fails when no move can be produced at all (input closed, no legal
    /// moves). Bad input that can be retried is handled inside the player.
    fn get_move(&mut self, board: &mut Board, color: Color) -> EngineResult<ChessMove>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: ChessMove) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
