//! End-to-end games through the public API
//!
//! This test suite covers:
//! - Scripted console games through the orchestrator
//! - Re-prompting on illegal input
//! - Engine moves always being antichess-legal
//! - Draw claims ending a game

use antichess_engine::agent::ai::{antichess_moves, EngineConfig, EnginePlayer, MoveSelector};
use antichess_engine::agent::human_player::{ConsolePlayer, ILLEGAL_MOVE_MESSAGE};
use antichess_engine::agent::player::{GameResult, Player};
use antichess_engine::board::Board;
use antichess_engine::error::EngineError;
use antichess_engine::game_repr::{Color, Rules};
use antichess_engine::orchestrator::Orchestrator;
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;
use std::time::Duration;

/// Output sink that can still be read after being moved into a player
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn console(input: &str, output: SharedOutput, name: &str) -> Box<dyn Player> {
    Box::new(ConsolePlayer::new(
        Cursor::new(input.as_bytes().to_vec()),
        output,
        name.to_string(),
    ))
}

fn fast_engine(depth: u8) -> EngineConfig {
    EngineConfig::default()
        .with_depth(depth)
        .with_time_limit(Duration::from_secs(5))
}

#[test]
fn test_scripted_fools_mate() {
    let white_out = SharedOutput::default();
    let black_out = SharedOutput::default();
    let white = console("f2f3\ng2g4\n", white_out.clone(), "Alice");
    let black = console("e7e5\ne5e3\nqueen to h4\nd8h4\n", black_out.clone(), "Bob");

    let mut game = Orchestrator::new(Board::default(), white, black, Vec::new()).quiet(true);
    let result = game.run().unwrap();

    assert_eq!(result, GameResult::BlackWins);
    assert_eq!(game.board().ply(), 4);

    let log = String::from_utf8(game.into_output()).unwrap();
    assert!(log.contains("Alice (White) moves: f2f3"));
    assert!(log.contains("Bob (Black) moves: d8h4"));
    assert!(log.ends_with("Game over: Black wins\n"));

    // An impossible pawn jump and free text were rejected before the mate
    assert_eq!(black_out.text().matches(ILLEGAL_MOVE_MESSAGE).count(), 2);
    assert_eq!(white_out.text().matches(ILLEGAL_MOVE_MESSAGE).count(), 0);
}

#[test]
fn test_board_printed_unless_quiet() {
    let white = console("f2f3\ng2g4\n", SharedOutput::default(), "Alice");
    let black = console("e7e5\nd8h4\n", SharedOutput::default(), "Bob");

    let mut game = Orchestrator::new(Board::default(), white, black, Vec::new());
    game.run().unwrap();

    let log = String::from_utf8(game.into_output()).unwrap();
    assert!(log.starts_with("r n b q k b n r"));
    // Four turns plus the final position, White's back rank never moves
    assert_eq!(log.matches("R N B Q K B N R").count(), 5);
}

#[test]
fn test_closed_input_aborts_game() {
    let white: Box<dyn Player> = Box::new(EnginePlayer::new(fast_engine(1), "AI".to_string()));
    let black = console("", SharedOutput::default(), "Bob");

    let mut game = Orchestrator::new(Board::default(), white, black, Vec::new()).quiet(true);
    assert!(matches!(game.run(), Err(EngineError::InputClosed)));
    assert_eq!(game.board().ply(), 1, "the engine moved before input ran out");
}

#[test]
fn test_game_starting_drawn_ends_immediately() {
    let white = console("", SharedOutput::default(), "Alice");
    let black = console("", SharedOutput::default(), "Bob");

    let bare_kings = Board::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
    let mut game = Orchestrator::new(bare_kings, white, black, Vec::new()).quiet(true);
    assert_eq!(game.run().unwrap(), GameResult::Draw);

    let white = console("", SharedOutput::default(), "Alice");
    let black = console("", SharedOutput::default(), "Bob");
    let exhausted = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
    let mut game = Orchestrator::new(exhausted, white, black, Vec::new()).quiet(true);
    assert_eq!(game.run().unwrap(), GameResult::DrawByFiftyMoves);
}

#[test]
fn test_repetition_claim_ends_game() {
    let white = console("g1f3\nf3g1\ng1f3\nf3g1\n", SharedOutput::default(), "Alice");
    let black = console("g8f6\nf6g8\ng8f6\nf6g8\n", SharedOutput::default(), "Bob");

    let mut game = Orchestrator::new(Board::default(), white, black, Vec::new()).quiet(true);
    assert_eq!(game.run().unwrap(), GameResult::DrawByRepetition);
    assert_eq!(game.board().ply(), 8);
}

#[test]
fn test_engine_self_play_stays_legal() {
    let selector = MoveSelector::new(fast_engine(1));
    let mut board = Board::default();

    for _ in 0..40 {
        if board.is_game_over() || board.can_claim_draw() {
            break;
        }
        let mover = board.side_to_move();
        let before = board.inner().get_hash();

        let mv = selector.select_move(&mut board, mover).unwrap();

        assert_eq!(board.inner().get_hash(), before, "search must restore the board");
        assert!(antichess_moves(&board).contains(&mv), "{mv} is not antichess-legal");
        board.push(mv);
    }
}

#[test]
fn test_engine_takes_compulsory_capture() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    let selector = MoveSelector::new(fast_engine(2));

    let mv = selector.select_move(&mut board, Color::White).unwrap();
    assert_eq!(mv.to_string(), "e4d5");
}

#[test]
fn test_engine_player_keeps_last_search() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    let mut engine = EnginePlayer::new(fast_engine(1), "AI".to_string());
    assert!(engine.last_search().is_none());

    let mv = engine.get_move(&mut board, Color::White).unwrap();
    assert_eq!(mv.to_string(), "e4d5");
    assert_eq!(board.ply(), 0);

    let stats = engine.last_search().unwrap();
    assert_eq!(stats.best_move, mv);
    assert!(!stats.forced_check);
    assert!(stats.completed);
    assert_eq!(stats.depth, 1);
    assert!(stats.nodes_searched > 0);
}
