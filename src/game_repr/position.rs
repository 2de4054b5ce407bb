use super::{Color, PieceKind, Square};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

/*
 * QUERY INTERFACE OF THE RULES ENGINE
 * The search only ever talks to a position through these traits.
 */

pub type MoveList<M> = SmallVec<[M; 64]>;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl CastlingRights {
    pub const BOTH: CastlingRights = CastlingRights { kingside: true, queenside: true };

    pub fn any(&self) -> bool {
        self.kingside || self.queenside
    }

    pub fn both(&self) -> bool {
        self.kingside && self.queenside
    }
}

/// Move-level queries and the mutating push/pop pair.
///
/// `push` and `pop` must be exact inverses: after `push(mv); pop()` every
/// query answers exactly as before.
pub trait Rules {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    fn side_to_move(&self) -> Color;

    /// Every legal move under standard chess rules, in engine enumeration order
    fn legal_moves(&self) -> MoveList<Self::Move>;

    fn is_capture(&self, mv: Self::Move) -> bool;

    fn gives_check(&self, mv: Self::Move) -> bool;

    fn push(&mut self, mv: Self::Move);

    /// Undo the most recent `push`, returning the move taken back
    fn pop(&mut self) -> Option<Self::Move>;

    /// Side to move is in check
    fn is_check(&self) -> bool;

    /// `Some` once the game has ended on its own (mate, stalemate, automatic draws)
    fn outcome(&self) -> Option<Outcome>;

    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Fifty moves by each side without a capture or pawn move
    fn is_fifty_moves(&self) -> bool;

    fn can_claim_threefold_repetition(&self) -> bool;

    fn can_claim_draw(&self) -> bool {
        self.is_fifty_moves() || self.can_claim_threefold_repetition()
    }
}

/// Static board queries needed by the evaluator
pub trait BoardView {
    fn castling_rights(&self, color: Color) -> CastlingRights;

    fn piece_count(&self, kind: PieceKind, color: Color) -> u32;

    fn king_square(&self, color: Color) -> Option<Square>;

    fn is_occupied(&self, square: Square) -> bool;
}

/// A move applied for the lifetime of the guard.
///
/// The move is pushed on construction and popped on drop, so every exit path
/// of a search branch (normal return, cut-off, deadline abort) restores the
/// position.
pub struct ScopedMove<'a, P: Rules + ?Sized> {
    pos: &'a mut P,
}

impl<'a, P: Rules + ?Sized> ScopedMove<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.push(mv);
        Self { pos }
    }
}

impl<P: Rules + ?Sized> Deref for ScopedMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.pos
    }
}

impl<P: Rules + ?Sized> DerefMut for ScopedMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.pos
    }
}

impl<P: Rules + ?Sized> Drop for ScopedMove<'_, P> {
    fn drop(&mut self) {
        self.pos.pop();
    }
}
