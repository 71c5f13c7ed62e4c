//! Win detection logic for tic-tac-toe.

use super::lines::LINES;
use crate::{Board, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then diagonals. Alternating
/// play can never give both players a line, so the first match is the
/// answer.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let mark = board.get(*a);
        if mark == board.get(*b) && mark == board.get(*c) {
            mark.player()
        } else {
            None
        }
    })
}
