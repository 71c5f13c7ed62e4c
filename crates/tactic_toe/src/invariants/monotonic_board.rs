//! Monotonic board invariant: the grid is exactly the replay of history.

use super::Invariant;
use crate::{Board, BoardState};

/// Invariant: Board squares are never overwritten.
///
/// Replaying the history onto an empty board, each move must land on an
/// empty cell, and the result must equal the current grid.
pub struct MonotonicBoardInvariant;

impl Invariant<BoardState> for MonotonicBoardInvariant {
    fn holds(state: &BoardState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.cell()) {
                return false;
            }
            reconstructed.place(mov.cell(), mov.player());
        }

        reconstructed == state.board()
    }

    fn description() -> &'static str {
        "Board equals the replay of its move history"
    }
}
