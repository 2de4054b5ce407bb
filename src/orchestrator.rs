//! Game loop coordination.
//!
//! This module contains the [`Orchestrator`], which runs one game between two
//! [`Player`]s on a shared [`Board`]. It manages:
//! - Turn management (asking the side to move for its move)
//! - Move execution and announcement
//! - End detection, including the draw claims the search never looks at
//!
//! # Example Flow
//!
//! ```text
//! [Check End] -> [Print Board] -> [Request Move] -> [Print Move]
//!   -> [Execute Move] -> [Notify Opponent] -> [Check End] ...
//! ```

use crate::agent::player::{GameResult, Player};
use crate::board::Board;
use crate::error::EngineResult;
use crate::game_repr::{Color, Rules};
use log::info;
use std::io::Write;

/// Runs a game to completion, printing progress to `output`.
///
/// # Game Flow
///
/// Each turn:
/// 1. Stop if the game ended on its own (mate, stalemate, automatic draws)
/// 2. Stop if fifty moves or threefold repetition can be claimed
/// 3. Print the board unless quiet
/// 4. Ask the side to move for a move and play it
pub struct Orchestrator<W> {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    output: W,
    /// Suppress board diagrams
    quiet: bool,
}

impl<W: Write> Orchestrator<W> {
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>, output: W) -> Self {
        Self {
            board,
            white,
            black,
            output,
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game ends and return the result.
    ///
    /// Player errors (closed input, no legal move) abort the game and are
    /// returned as is.
    pub fn run(&mut self) -> EngineResult<GameResult> {
        let result = loop {
            if let Some(result) = self.check_game_end() {
                break result;
            }
            self.play_turn()?;
        };

        if !self.quiet {
            writeln!(self.output, "{}", self.board)?;
        }
        writeln!(self.output, "Game over: {result}")?;
        info!("game finished after {} plies: {}", self.board.ply(), result);

        self.white.game_ended(result);
        self.black.game_ended(result);
        Ok(result)
    }

    fn play_turn(&mut self) -> EngineResult<()> {
        let color = self.board.side_to_move();

        if !self.quiet {
            writeln!(self.output, "{}\n", self.board)?;
        }

        let (mover, opponent) = match color {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        };

        let mv = mover.get_move(&mut self.board, color)?;
        writeln!(self.output, "{} ({}) moves: {}", mover.name(), color, mv)?;

        self.board.push(mv);
        opponent.opponent_moved(mv);
        Ok(())
    }

    fn check_game_end(&self) -> Option<GameResult> {
        if let Some(outcome) = self.board.outcome() {
            return Some(GameResult::from_outcome(outcome));
        }
        if self.board.is_fifty_moves() {
            return Some(GameResult::DrawByFiftyMoves);
        }
        if self.board.can_claim_threefold_repetition() {
            return Some(GameResult::DrawByRepetition);
        }
        None
    }
}
