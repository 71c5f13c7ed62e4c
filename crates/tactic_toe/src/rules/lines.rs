//! The eight winning lines.

use crate::Cell;

/// Every row, then every column, then both diagonals.
pub static LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
    [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
    // Columns
    [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
    [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
    [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
    // Diagonals
    [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
    [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
];

/// Lines passing through `cell`: its row, its column, and any diagonals.
///
/// Yields 2 lines for sides, 3 for corners, 4 for the center.
pub fn lines_through(cell: Cell) -> impl Iterator<Item = &'static [Cell; 3]> {
    LINES.iter().filter(move |line| line.contains(&cell))
}

/// The two cells of `line` other than `cell`.
pub(crate) fn others(line: &[Cell; 3], cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    line.iter().copied().filter(move |c| *c != cell)
}
