//! Human player that types moves on a text stream.
//!
//! `ConsolePlayer` implements the `Player` trait by reading UCI long algebraic
//! moves (`e2e4`, `e7e8q`) one per line. Any `BufRead`/`Write` pair works, so
//! the same player serves stdin/stdout in the binary and scripted input in tests.
//!
//! # Input Handling
//!
//! - Each line is parsed with [`Board::parse_move`]
//! - The move is checked against the antichess move set (captures compulsory)
//! - Unparsable or illegal input prints `Illegal move, try again.` and re-prompts
//! - End of input ends the game with `EngineError::InputClosed`

use super::ai::move_filter::validate_move;
use super::player::Player;
use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::Color;
use chess::ChessMove;
use log::debug;
use std::io::{BufRead, Write};

pub const MOVE_PROMPT: &str = "Enter your move: ";
pub const ILLEGAL_MOVE_MESSAGE: &str = "Illegal move, try again.";

pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    /// Give back the output stream, e.g. to inspect what a test player printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> EngineResult<String> {
        write!(self.output, "{MOVE_PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn get_move(&mut self, board: &mut Board, _color: Color) -> EngineResult<ChessMove> {
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                continue;
            }

            match board
                .parse_move(&line)
                .and_then(|mv| validate_move(&*board, mv))
            {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    debug!("rejected input {:?}: {}", line, err);
                    writeln!(self.output, "{ILLEGAL_MOVE_MESSAGE}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePlayer::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            "Tester".to_string(),
        )
    }

    #[test]
    fn test_reads_legal_move() {
        let mut board = Board::default();
        let mut human = player("e2e4\n");

        let mv = human.get_move(&mut board, Color::White).unwrap();
        assert_eq!(mv.to_string(), "e2e4");

        let printed = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(printed, MOVE_PROMPT);
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut board = Board::default();
        let mut human = player("hello\ne2e5\n\ng1f3\n");

        let mv = human.get_move(&mut board, Color::White).unwrap();
        assert_eq!(mv.to_string(), "g1f3");

        let printed = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(printed.matches(ILLEGAL_MOVE_MESSAGE).count(), 2);
        assert_eq!(printed.matches(MOVE_PROMPT).count(), 4);
    }

    #[test]
    fn test_non_capture_rejected_when_capture_available() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        let mut human = player("e4e5\ne4d5\n");

        let mv = human.get_move(&mut board, Color::White).unwrap();
        assert_eq!(mv.to_string(), "e4d5");
    }

    #[test]
    fn test_end_of_input() {
        let mut board = Board::default();
        let mut human = player("");
        assert!(matches!(
            human.get_move(&mut board, Color::White),
            Err(EngineError::InputClosed)
        ));
    }
}
