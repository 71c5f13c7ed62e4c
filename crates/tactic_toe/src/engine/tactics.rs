//! The individual move-selection rules.
//!
//! Each tactic inspects a position and either proposes a cell or passes.
//! None of them mutate the caller's board; what-if placements happen on a
//! private copy.

use super::threats::{forking_cells, is_forking, threat_count, winning_cell};
use crate::{Board, BoardState, Cell, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

/// Complete a line of our own.
pub(super) fn win(board: &Board, me: Player) -> Option<Cell> {
    winning_cell(board, me)
}

/// Deny the opponent a completed line.
pub(super) fn block(board: &Board, me: Player) -> Option<Cell> {
    winning_cell(board, me.opponent())
}

/// First cell (row-major) that gives us two threats at once.
pub(super) fn fork(board: &Board, me: Player) -> Option<Cell> {
    forking_cells(board, me).first().copied()
}

/// Keep the opponent from forking on their next move.
///
/// With two or more opponent fork cells, look for a move that makes a
/// threat of our own, is not itself a fork cell, and whose forced reply
/// does not hand the opponent a fork. Failing that (or with a single fork
/// cell), occupy a fork cell, preferring one that also threatens.
pub(super) fn block_fork(board: &Board, me: Player) -> Option<Cell> {
    let forks = forking_cells(board, me.opponent());
    if forks.is_empty() {
        return None;
    }
    trace!(?forks, "Opponent fork cells");

    if forks.len() >= 2 {
        if let Some(cell) = force_reply(board, me, &forks) {
            return Some(cell);
        }
        debug!(count = forks.len(), "No forcing move; occupying a fork cell");
    }

    forks
        .iter()
        .copied()
        .find(|cell| threat_count(board, *cell, me) >= 1)
        .or_else(|| forks.first().copied())
}

/// A threatening move whose forced block is not an opponent fork cell.
fn force_reply(board: &Board, me: Player, forks: &[Cell]) -> Option<Cell> {
    let opponent = me.opponent();

    board.empty_cells().into_iter().find(|&cell| {
        if forks.contains(&cell) || threat_count(board, cell, me) == 0 {
            return false;
        }

        let mut probe = *board;
        probe.place(cell, me);
        match winning_cell(&probe, me) {
            Some(reply) => {
                let safe = !is_forking(&probe, reply, opponent);
                trace!(%cell, %reply, safe, "Probed forcing move");
                safe
            }
            None => false,
        }
    })
}

/// The center, if free.
pub(super) fn center(board: &Board) -> Option<Cell> {
    board.is_empty(Cell::CENTER).then_some(Cell::CENTER)
}

/// Answer an opponent corner with the diagonally opposite corner.
pub(super) fn opposite_corner(state: &BoardState, me: Player) -> Option<Cell> {
    let last = state.last_move()?;
    if last.player() != me.opponent() {
        return None;
    }
    last.cell()
        .opposite_corner()
        .filter(|cell| !state.is_occupied(*cell))
}

/// Empty corners, in [`Cell::CORNERS`] order.
pub fn empty_corners(board: &Board) -> Vec<Cell> {
    free_among(board, &Cell::CORNERS)
}

/// Empty sides, in [`Cell::SIDES`] order.
pub fn empty_sides(board: &Board) -> Vec<Cell> {
    free_among(board, &Cell::SIDES)
}

/// A uniformly random empty corner.
pub(super) fn corner<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    empty_corners(board).choose(rng).copied()
}

/// A uniformly random empty side.
pub(super) fn side<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    empty_sides(board).choose(rng).copied()
}

fn free_among(board: &Board, cells: &[Cell]) -> Vec<Cell> {
    cells
        .iter()
        .copied()
        .filter(|cell| board.is_empty(*cell))
        .collect()
}
