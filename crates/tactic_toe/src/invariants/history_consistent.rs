//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::BoardState;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardState> for HistoryConsistentInvariant {
    fn holds(state: &BoardState) -> bool {
        state.history().len() + state.count_empty() == 9
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
