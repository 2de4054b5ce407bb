pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::*;

pub mod ai;
pub use ai::{EngineConfig, EnginePlayer, MoveSelector, SearchResult};
