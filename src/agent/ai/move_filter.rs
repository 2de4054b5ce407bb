// Antichess move generation
//
// Captures are compulsory: when any legal capture exists only captures may be
// played, otherwise every legal move is allowed. Enumeration order of the
// underlying rules engine is preserved.

use crate::error::{EngineError, EngineResult};
use crate::game_repr::{MoveList, Rules};

/// Legal moves under the compulsory-capture rule
pub fn antichess_moves<P: Rules + ?Sized>(pos: &P) -> MoveList<P::Move> {
    let legal = pos.legal_moves();
    let captures: MoveList<P::Move> = legal
        .iter()
        .copied()
        .filter(|&mv| pos.is_capture(mv))
        .collect();

    if captures.is_empty() {
        legal
    } else {
        captures
    }
}

pub fn is_antichess_legal<P: Rules + ?Sized>(pos: &P, mv: P::Move) -> bool {
    antichess_moves(pos).contains(&mv)
}

/// Accept `mv` only if it belongs to the antichess move set
pub fn validate_move<P: Rules + ?Sized>(pos: &P, mv: P::Move) -> EngineResult<P::Move> {
    if is_antichess_legal(pos, mv) {
        Ok(mv)
    } else {
        Err(EngineError::IllegalMove { mv: mv.to_string() })
    }
}
