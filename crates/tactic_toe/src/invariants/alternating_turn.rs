//! Alternating turn invariant: Cross, Circle, Cross, ...

use super::Invariant;
use crate::{BoardState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show Cross, Circle, Cross, ... and the player to move
/// must be the one after the last recorded move.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(state: &BoardState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player() != Player::Cross
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player() == pair[1].player())
        {
            return false;
        }

        let expected_next = history
            .last()
            .map_or(Player::Cross, |mov| mov.player().opponent());

        state.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
