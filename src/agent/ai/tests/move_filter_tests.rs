// Compulsory-capture move generation

use crate::agent::ai::move_filter::{antichess_moves, is_antichess_legal, validate_move};
use crate::board::Board;
use crate::error::EngineError;
use crate::game_repr::Rules;

fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let mv = board.parse_move(text).unwrap();
        board.push(mv);
    }
}

fn uci(board: &Board) -> Vec<String> {
    antichess_moves(board).iter().map(|mv| mv.to_string()).collect()
}

#[test]
fn test_capture_is_compulsory() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    assert_eq!(uci(&board), vec!["e4d5"]);
    assert_eq!(board.legal_moves().len(), 31);
}

#[test]
fn test_every_capture_is_offered() {
    // Both the e-pawn and the c3 knight can take on d5
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/2N5/PPPP1PPP/R1BQKBNR w KQkq - 0 2").unwrap();
    let mut moves = uci(&board);
    moves.sort();
    assert_eq!(moves, vec!["c3d5", "e4d5"]);
}

#[test]
fn test_en_passant_counts_as_capture() {
    let mut board = Board::default();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(uci(&board), vec!["e5d6"]);
}

#[test]
fn test_all_moves_without_captures() {
    let board = Board::default();
    let filtered = antichess_moves(&board);
    assert_eq!(filtered.len(), 20);
    assert_eq!(filtered, board.legal_moves(), "order must be preserved");
}

#[test]
fn test_no_moves_after_mate() {
    let mut board = Board::default();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(antichess_moves(&board).is_empty());
}

#[test]
fn test_validate_move() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();

    let capture = board.parse_move("e4d5").unwrap();
    assert!(is_antichess_legal(&board, capture));
    assert_eq!(validate_move(&board, capture).unwrap(), capture);

    let quiet = board.parse_move("e4e5").unwrap();
    assert!(board.legal_moves().contains(&quiet));
    assert!(!is_antichess_legal(&board, quiet));
    match validate_move(&board, quiet) {
        Err(EngineError::IllegalMove { mv }) => assert_eq!(mv, "e4e5"),
        other => panic!("expected IllegalMove, got {:?}", other),
    }
}
