//! The bare 3x3 occupancy grid.

use crate::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe grid.
///
/// `Board` is a plain value: it carries no turn or history, and copying it
/// is how callers take a private what-if view of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a 3-row picture such as `["XO.", ".X.", "..O"]`.
    ///
    /// `X`/`x` is Cross, `O`/`o` is Circle, anything else is empty.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().take(3).enumerate() {
                board.marks[r * 3 + c] = match ch {
                    'X' | 'x' => Mark::Cross,
                    'O' | 'o' => Mark::Circle,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    /// Mark at `cell`; off-board cells read as empty.
    pub fn get(&self, cell: Cell) -> Mark {
        cell.index().map_or(Mark::Empty, |i| self.marks[i])
    }

    /// Overwrites the mark at a valid `cell`.
    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        if let Some(i) = cell.index() {
            self.marks[i] = mark;
        }
    }

    /// Places `player` at `cell`.
    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        self.set(cell, Mark::from(player));
    }

    /// True if `cell` is on the board and holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.is_valid() && self.get(cell).is_empty()
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.marks.iter().filter(|m| m.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.marks[pos] {
                    Mark::Empty => (pos + 1).to_string(),
                    mark => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
