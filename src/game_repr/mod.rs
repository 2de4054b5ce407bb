mod piece;
mod position;
mod square;

pub use piece::*;
pub use position::*;
pub use square::*;
