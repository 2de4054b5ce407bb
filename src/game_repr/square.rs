use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// File/rank steps to the eight surrounding squares
static NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Board square, 0..64 with a1 = 0, b1 = 1, ..., h8 = 63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Square(index as u8))
    }

    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then(|| Square(rank * 8 + file))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn file(self) -> u8 {
        self.0 % 8
    }

    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Step by (file, rank) deltas; `None` when the result leaves the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Square::from_coords(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Adjacent squares that exist on the board (3 in a corner, 5 on an edge, 8 otherwise)
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(df, dr)| self.offset(df, dr))
    }

    /// Same file, rank seen from the other side (e1 <-> e8)
    pub fn mirror(self) -> Self {
        Square(self.0 ^ 56)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidSquare { text: s.to_string() };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::from_coords(file, rank).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(sq("a1").index(), 0);
        assert_eq!(sq("h1").index(), 7);
        assert_eq!(sq("e4").index(), 28);
        assert_eq!(sq("h8").index(), 63);
        assert_eq!(sq("e4").to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(sq("a1").neighbors().count(), 3);
        assert_eq!(sq("h8").neighbors().count(), 3);
        assert_eq!(sq("e1").neighbors().count(), 5);
        assert_eq!(sq("a4").neighbors().count(), 5);
        assert_eq!(sq("d5").neighbors().count(), 8);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = sq("d5");
        for n in center.neighbors() {
            let df = (n.file() as i8 - center.file() as i8).abs();
            let dr = (n.rank() as i8 - center.rank() as i8).abs();
            assert!(df <= 1 && dr <= 1 && n != center);
        }
    }

    #[test]
    fn test_mirror() {
        assert_eq!(sq("e1").mirror(), sq("e8"));
        assert_eq!(sq("g8").mirror(), sq("g1"));
        assert_eq!(sq("c4").mirror(), sq("c5"));
    }
}
