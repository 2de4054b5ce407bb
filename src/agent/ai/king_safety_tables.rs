// King square values for the king-safety term
// Same scale as the neighbour bonus, so a king tucked on its back rank is
// worth a few pawns of shelter at most.
// Table is from White's perspective (rank 1 first); Black looks it up mirrored.

use super::evaluation::Score;
use crate::game_repr::{Color, Square};

pub const KING_SAFETY_TABLE: [Score; 64] = [
      4,  6,  2,  0,  0,  2,  6,  4,  // Rank 1 (castled corners)
      4,  4,  0,  0,  0,  0,  4,  4,  // Rank 2
     -2, -4, -4, -4, -4, -4, -4, -2,  // Rank 3
     -4, -6, -6, -8, -8, -6, -6, -4,  // Rank 4
     -6, -8, -8,-10,-10, -8, -8, -6,  // Rank 5
     -6, -8, -8,-10,-10, -8, -8, -6,  // Rank 6
     -6, -8, -8,-10,-10, -8, -8, -6,  // Rank 7
     -6, -8, -8,-10,-10, -8, -8, -6,  // Rank 8
];

/// Value of `square` in `table` for a king of `color`
#[inline]
pub fn king_square_value(table: &[Score; 64], square: Square, color: Color) -> Score {
    let index = match color {
        Color::White => square.index(),
        Color::Black => square.mirror().index(),
    };
    table[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_black_lookup_is_mirrored() {
        for index in 0..64 {
            let square = Square::from_index(index).unwrap();
            assert_eq!(
                king_square_value(&KING_SAFETY_TABLE, square, Color::White),
                king_square_value(&KING_SAFETY_TABLE, square.mirror(), Color::Black),
            );
        }
    }

    #[test]
    fn test_home_squares_beat_centre() {
        let g1 = king_square_value(&KING_SAFETY_TABLE, sq("g1"), Color::White);
        let g8 = king_square_value(&KING_SAFETY_TABLE, sq("g8"), Color::Black);
        let e4 = king_square_value(&KING_SAFETY_TABLE, sq("e4"), Color::White);
        assert_eq!(g1, 6);
        assert_eq!(g8, 6);
        assert!(e4 < 0);
    }
}
