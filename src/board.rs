use crate::error::{EngineError, EngineResult};
use crate::game_repr::{
    BoardView, CastlingRights, Color, MoveList, Outcome, PieceKind, Rules, Square,
};
use chess::{BoardStatus, ChessMove, MoveGen, Piece, ALL_SQUARES};
use std::fmt;
use std::str::FromStr;

/// Half-move clock value at which a draw may be claimed
const FIFTY_MOVE_PLIES: u32 = 100;
/// Half-move clock value at which the game is drawn automatically
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Everything needed to take a move back
#[derive(Clone, Copy)]
struct Snapshot {
    board: chess::Board,
    halfmove_clock: u32,
    mv: ChessMove,
}

/// Game board backed by the `chess` crate.
///
/// `chess::Board` is an immutable copy-make position, so the Board keeps an
/// undo stack to offer the push/pop interface the search relies on. It also
/// tracks what a bare position cannot know on its own:
///
/// - the half-move clock (fifty and seventy-five move rules)
/// - the hash of every position reached (threefold and fivefold repetition)
///
/// ```rust
/// use antichess_engine::board::Board;
/// use antichess_engine::game_repr::Rules;
///
/// let mut board = Board::default();
/// let mv = board.parse_move("e2e4").unwrap();
/// board.push(mv);
/// assert_eq!(board.pop(), Some(mv));
/// ```
#[derive(Clone)]
pub struct Board {
    board: chess::Board,
    halfmove_clock: u32,
    undo_stack: Vec<Snapshot>,
    /// Hash of every position since the start, current position last
    hash_history: Vec<u64>,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_position(chess::Board::default(), 0)
    }
}

impl Board {
    fn from_position(board: chess::Board, halfmove_clock: u32) -> Self {
        Self {
            board,
            halfmove_clock,
            undo_stack: Vec::new(),
            hash_history: vec![board.get_hash()],
        }
    }

    /// Create a board from a FEN string.
    ///
    /// All six fields are expected; the half-move field seeds the clock used
    /// by the fifty-move rule.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let board = chess::Board::from_str(fen).map_err(|e| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;

        let halfmove_clock = fen
            .split_whitespace()
            .nth(4)
            .map(|field| {
                field.parse::<u32>().map_err(|_| EngineError::InvalidFen {
                    fen: fen.to_string(),
                    reason: format!("bad half-move clock {field:?}"),
                })
            })
            .transpose()?
            .unwrap_or(0);

        Ok(Self::from_position(board, halfmove_clock))
    }

    /// The underlying `chess` crate position
    pub fn inner(&self) -> &chess::Board {
        &self.board
    }

    /// Number of moves pushed since construction
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Parse UCI long algebraic move text (`e2e4`, `e7e8q`).
    ///
    /// Only the syntax is checked here; legality is the caller's business
    /// (see `move_filter::validate_move`).
    pub fn parse_move(&self, text: &str) -> EngineResult<ChessMove> {
        let text = text.trim();
        let invalid = || EngineError::InvalidMoveText { text: text.to_string() };

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::King => {
                    Some(Piece::from(kind))
                }
                _ => return Err(invalid()),
            },
        };

        Ok(ChessMove::new(
            ALL_SQUARES[from.index()],
            ALL_SQUARES[to.index()],
            promotion,
        ))
    }

    /// How often the current position occurred since the last irreversible move
    fn repetition_count(&self) -> usize {
        let current = self.board.get_hash();
        self.hash_history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize + 1)
            .filter(|&&hash| hash == current)
            .count()
    }

    /// Bare kings, or kings plus a single knight or bishop.
    ///
    /// Bishops that all stand on one square colour are not recognised as a
    /// dead position.
    fn is_insufficient_material(&self) -> bool {
        let heavy = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if heavy.popcnt() > 0 {
            return false;
        }
        let minors = *self.board.pieces(Piece::Knight) | *self.board.pieces(Piece::Bishop);
        minors.popcnt() <= 1
    }

    fn is_en_passant(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
            && self.board.piece_on(mv.get_dest()).is_none()
    }
}

impl Rules for Board {
    type Move = ChessMove;

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn legal_moves(&self) -> MoveList<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn is_capture(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_dest()).is_some() || self.is_en_passant(mv)
    }

    fn gives_check(&self, mv: ChessMove) -> bool {
        self.board.make_move_new(mv).checkers().popcnt() > 0
    }

    fn push(&mut self, mv: ChessMove) {
        let irreversible =
            self.is_capture(mv) || self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);

        self.undo_stack.push(Snapshot {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            mv,
        });
        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if irreversible { 0 } else { self.halfmove_clock + 1 };
        self.hash_history.push(self.board.get_hash());
    }

    fn pop(&mut self) -> Option<ChessMove> {
        let snapshot = self.undo_stack.pop()?;
        self.board = snapshot.board;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.hash_history.pop();
        Some(snapshot.mv)
    }

    fn is_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    /// Checkmate, stalemate and the automatic draws.
    ///
    /// Insufficient material is only bare kings or a single minor piece.
    /// K+B vs K+B with same-coloured bishops still counts as ongoing.
    fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            BoardStatus::Checkmate => Some(Outcome::Decisive {
                winner: self.side_to_move().opposite(),
            }),
            BoardStatus::Stalemate => Some(Outcome::Draw),
            BoardStatus::Ongoing => {
                let automatic_draw = self.is_insufficient_material()
                    || self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
                    || self.repetition_count() >= 5;
                automatic_draw.then_some(Outcome::Draw)
            }
        }
    }

    fn is_fifty_moves(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
    }

    /// The current position has occurred three times.
    ///
    /// A claim announced together with the move that would produce the third
    /// occurrence is not detected until that move is played.
    fn can_claim_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }
}

impl BoardView for Board {
    fn castling_rights(&self, color: Color) -> CastlingRights {
        let rights = self.board.castle_rights(color.into());
        CastlingRights {
            kingside: rights.has_kingside(),
            queenside: rights.has_queenside(),
        }
    }

    fn piece_count(&self, kind: PieceKind, color: Color) -> u32 {
        (*self.board.pieces(kind.into()) & *self.board.color_combined(color.into())).popcnt()
    }

    fn king_square(&self, color: Color) -> Option<Square> {
        Square::from_index(self.board.king_square(color.into()).to_index())
    }

    fn is_occupied(&self, square: Square) -> bool {
        self.board.piece_on(ALL_SQUARES[square.index()]).is_some()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram, rank 8 first, uppercase for White
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = ALL_SQUARES[rank * 8 + file];
                let symbol = match (self.board.piece_on(square), self.board.color_on(square)) {
                    (Some(piece), Some(color)) => {
                        let c = PieceKind::from(piece).to_char();
                        if color == chess::Color::White {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    }
                    _ => '.',
                };
                if file > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<chess::Color> for Color {
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}

impl From<Color> for chess::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => chess::Color::White,
            Color::Black => chess::Color::Black,
        }
    }
}

impl From<Piece> for PieceKind {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Pawn => PieceKind::Pawn,
            Piece::Knight => PieceKind::Knight,
            Piece::Bishop => PieceKind::Bishop,
            Piece::Rook => PieceKind::Rook,
            Piece::Queen => PieceKind::Queen,
            Piece::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Piece::Pawn,
            PieceKind::Knight => Piece::Knight,
            PieceKind::Bishop => Piece::Bishop,
            PieceKind::Rook => Piece::Rook,
            PieceKind::Queen => Piece::Queen,
            PieceKind::King => Piece::King,
        }
    }
}
