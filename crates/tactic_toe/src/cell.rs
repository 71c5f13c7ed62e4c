//! Board coordinates and the fixed geometry of a 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A coordinate on the board.
///
/// Valid cells have both coordinates in `0..=2`. [`Cell::INVALID`] stands in
/// for "no cell" where a coordinate arrives from outside the core (for
/// example a presentation layer that could not map a click).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Cell {
    row: i8,
    column: i8,
}

impl Cell {
    /// The "no cell" sentinel.
    pub const INVALID: Cell = Cell::new(-1, -1);

    /// The center cell.
    pub const CENTER: Cell = Cell::new(1, 1);

    /// Corner cells, in the order tie-breaks enumerate them.
    pub const CORNERS: [Cell; 4] = [
        Cell::new(0, 0),
        Cell::new(0, 2),
        Cell::new(2, 0),
        Cell::new(2, 2),
    ];

    /// Edge cells that are neither corners nor the center.
    pub const SIDES: [Cell; 4] = [
        Cell::new(0, 1),
        Cell::new(1, 2),
        Cell::new(2, 1),
        Cell::new(1, 0),
    ];

    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 0),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ];

    /// Creates a cell. No range check is made; see [`Cell::is_valid`].
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    /// Row coordinate.
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Column coordinate.
    pub const fn column(self) -> i8 {
        self.column
    }

    /// True if both coordinates lie on the board.
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row <= 2 && self.column >= 0 && self.column <= 2
    }

    /// Row-major index (0-8), or `None` for an off-board cell.
    pub const fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some((self.row * 3 + self.column) as usize)
        } else {
            None
        }
    }

    /// Cell at a row-major index (0-8).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::new((index / 3) as i8, (index % 3) as i8))
        } else {
            None
        }
    }

    /// True for the four corners.
    pub const fn is_corner(self) -> bool {
        self.is_valid() && self.row != 1 && self.column != 1
    }

    /// True for the four edge midpoints.
    pub const fn is_side(self) -> bool {
        self.is_valid() && (self.row == 1) != (self.column == 1)
    }

    /// True for (1, 1).
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.column == 1
    }

    /// The diagonally opposite corner: (0,0)<->(2,2), (0,2)<->(2,0).
    pub const fn opposite_corner(self) -> Option<Self> {
        if self.is_corner() {
            Some(Self::new(2 - self.row, 2 - self.column))
        } else {
            None
        }
    }

    /// Parses user input into a cell.
    ///
    /// Accepts a single keypad digit `1`-`9` (row-major, 1-based) or a
    /// `row column` pair separated by whitespace or a comma (0-based).
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [single] => {
                let number: usize = single.parse().ok()?;
                number.checked_sub(1).and_then(Self::from_index)
            }
            [row, column] => {
                let cell = Self::new(row.parse().ok()?, column.parse().ok()?);
                cell.is_valid().then_some(cell)
            }
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        assert!(!Cell::INVALID.is_valid());
        assert!(!Cell::new(0, 3).is_valid());
        assert!(Cell::new(2, 2).is_valid());
        assert_eq!(Cell::INVALID.index(), None);
    }

    #[test]
    fn test_index_round_trips_row_major() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), Some(i));
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_classification_partitions_board() {
        for cell in Cell::ALL {
            let kinds = [cell.is_corner(), cell.is_side(), cell.is_center()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{cell}");
        }
        assert!(Cell::CORNERS.iter().all(|c| c.is_corner()));
        assert!(Cell::SIDES.iter().all(|c| c.is_side()));
    }

    #[test]
    fn test_opposite_corners() {
        assert_eq!(Cell::new(0, 0).opposite_corner(), Some(Cell::new(2, 2)));
        assert_eq!(Cell::new(2, 2).opposite_corner(), Some(Cell::new(0, 0)));
        assert_eq!(Cell::new(0, 2).opposite_corner(), Some(Cell::new(2, 0)));
        assert_eq!(Cell::new(2, 0).opposite_corner(), Some(Cell::new(0, 2)));
        assert_eq!(Cell::CENTER.opposite_corner(), None);
        assert_eq!(Cell::new(0, 1).opposite_corner(), None);
    }

    #[test]
    fn test_parse_keypad_and_pairs() {
        assert_eq!(Cell::parse("1"), Some(Cell::new(0, 0)));
        assert_eq!(Cell::parse(" 5 "), Some(Cell::CENTER));
        assert_eq!(Cell::parse("9"), Some(Cell::new(2, 2)));
        assert_eq!(Cell::parse("0"), None);
        assert_eq!(Cell::parse("10"), None);
        assert_eq!(Cell::parse("1 2"), Some(Cell::new(1, 2)));
        assert_eq!(Cell::parse("2,0"), Some(Cell::new(2, 0)));
        assert_eq!(Cell::parse("3 0"), None);
        assert_eq!(Cell::parse("a b"), None);
        assert_eq!(Cell::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }
}
