//! Antichess move-selection engine.
//!
//! Captures are compulsory. The engine restricts the legal move set
//! accordingly, plays any checking move straight away, and otherwise runs a
//! time-bounded alpha-beta search whose depth adapts to the number of
//! candidate moves.
//!
//! ```rust
//! use antichess_engine::agent::ai::{EngineConfig, MoveSelector};
//! use antichess_engine::board::Board;
//! use antichess_engine::game_repr::Color;
//!
//! let mut board = Board::default();
//! let selector = MoveSelector::new(EngineConfig::default().with_depth(1));
//! let mv = selector.select_move(&mut board, Color::White).unwrap();
//! println!("engine plays {mv}");
//! ```

pub mod agent;
pub mod board;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use agent::ai::{antichess_moves, evaluate, EngineConfig, MoveSelector};
pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use orchestrator::Orchestrator;
