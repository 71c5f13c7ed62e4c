//! Moves and the errors raised when one cannot be applied.

use crate::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a cell.
///
/// Moves are recorded in history at the moment they are applied and are
/// replayed verbatim by redo.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{player} -> {cell}")]
pub struct Move {
    /// Where the mark was placed.
    cell: Cell,
    /// Who placed it.
    player: Player,
}

impl Move {
    /// Returns the cell of this move.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The cell lies outside the 3x3 grid.
    #[display("Cell {_0} is off the board")]
    OutOfRange(#[error(not(source))] Cell),

    /// The cell already holds a mark.
    #[display("Cell {cell} is already occupied by {by}")]
    Occupied {
        /// The requested cell.
        cell: Cell,
        /// Who already holds it.
        by: Player,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
