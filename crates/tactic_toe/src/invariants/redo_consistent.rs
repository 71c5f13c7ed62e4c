//! Redo consistency invariant: undone moves can be replayed as recorded.

use super::Invariant;
use crate::BoardState;

/// Invariant: Every move in the redo buffer targets an empty cell, and
/// replaying the buffer continues the alternation from the current turn.
pub struct RedoConsistentInvariant;

impl Invariant<BoardState> for RedoConsistentInvariant {
    fn holds(state: &BoardState) -> bool {
        let board = state.board();
        let mut expected = state.current_turn();

        // Most recently undone move is replayed first.
        for mov in state.redo_buffer().iter().rev() {
            if !board.is_empty(mov.cell()) || mov.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Redo buffer replays onto empty cells in turn order"
    }
}
