//! EnginePlayer - antichess AI driven by the move selector
//!
//! Implements the `Player` trait by delegating to [`MoveSelector`]. The board
//! the orchestrator lends is searched in place with push/pop and handed back
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use antichess_engine::agent::ai::{EngineConfig, EnginePlayer};
//! use antichess_engine::agent::player::Player;
//! use antichess_engine::board::Board;
//! use antichess_engine::game_repr::{Color, Rules};
//!
//! let mut board = Board::default();
//! let mut engine = EnginePlayer::new(EngineConfig::default().with_depth(1), "Engine".to_string());
//! let mv = engine.get_move(&mut board, Color::White).unwrap();
//! assert!(board.legal_moves().contains(&mv));
//! ```

use super::config::EngineConfig;
use super::search::{MoveSelector, SearchResult};
use crate::agent::player::Player;
use crate::board::Board;
use crate::error::EngineResult;
use crate::game_repr::Color;
use chess::ChessMove;
use log::info;

pub struct EnginePlayer {
    selector: MoveSelector,
    name: String,
    /// Statistics of the most recent search
    last_search: Option<SearchResult<ChessMove>>,
}

impl EnginePlayer {
    pub fn new(config: EngineConfig, name: String) -> Self {
        Self {
            selector: MoveSelector::new(config),
            name,
            last_search: None,
        }
    }

    pub fn last_search(&self) -> Option<&SearchResult<ChessMove>> {
        self.last_search.as_ref()
    }
}

impl Player for EnginePlayer {
    fn get_move(&mut self, board: &mut Board, color: Color) -> EngineResult<ChessMove> {
        let result = self.selector.search(board, color)?;
        info!(
            "{} plays {} (score {}, depth {}, {} nodes, {}ms)",
            self.name,
            result.best_move,
            result.score,
            result.depth,
            result.nodes_searched,
            result.time_ms
        );
        let mv = result.best_move;
        self.last_search = Some(result);
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
