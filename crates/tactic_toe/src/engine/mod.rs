//! Rule-based move selection.
//!
//! The engine never searches ahead. It walks a fixed priority list of
//! tactics ([`Rule`]) and plays the first one that proposes a cell:
//!
//! 1. win, 2. block, 3. fork, 4. block a fork, 5. center,
//! 6. opposite corner, 7. empty corner, 8. empty side.
//!
//! Randomness only enters at the corner and side rules, through a caller
//! supplied [`Rng`], so seeded generators give reproducible games.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tactic_toe::{BoardState, Cell, Player, engine};
//!
//! let state = BoardState::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! assert_eq!(engine::choose_move(&state, Player::Circle, &mut rng), Cell::CENTER);
//! ```

mod tactics;
mod threats;

pub use tactics::{empty_corners, empty_sides};
pub use threats::{forking_cells, is_forking, threat_count, winning_cell};

use crate::{BoardState, Cell, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A tactic in the engine's priority list, highest priority first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// Complete three in a line.
    Win,
    /// Stop the opponent completing three in a line.
    Block,
    /// Create two threats at once.
    Fork,
    /// Deny the opponent a fork.
    BlockFork,
    /// Take the center.
    Center,
    /// Mirror the opponent's corner.
    OppositeCorner,
    /// Any empty corner, chosen at random.
    EmptyCorner,
    /// Any empty side, chosen at random.
    EmptySide,
}

impl Rule {
    /// The cell this rule proposes for `me`, if it applies.
    pub fn propose<R: Rng + ?Sized>(
        self,
        state: &BoardState,
        me: Player,
        rng: &mut R,
    ) -> Option<Cell> {
        let board = state.board();
        match self {
            Rule::Win => tactics::win(&board, me),
            Rule::Block => tactics::block(&board, me),
            Rule::Fork => tactics::fork(&board, me),
            Rule::BlockFork => tactics::block_fork(&board, me),
            Rule::Center => tactics::center(&board),
            Rule::OppositeCorner => tactics::opposite_corner(state, me),
            Rule::EmptyCorner => tactics::corner(&board, rng),
            Rule::EmptySide => tactics::side(&board, rng),
        }
    }
}

/// A chosen cell and the rule that produced it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[display("{cell} by {rule}")]
pub struct Decision {
    /// Where to play.
    pub cell: Cell,
    /// Which tactic fired.
    pub rule: Rule,
}

/// Picks a move for `me`, reporting which rule fired.
///
/// Returns `None` only when the board is full. The state is read, never
/// written.
#[instrument(skip(state, me, rng), fields(me = %me, plies = state.history().len()))]
pub fn decide<R: Rng + ?Sized>(state: &BoardState, me: Player, rng: &mut R) -> Option<Decision> {
    if state.is_full() {
        debug!("Board is full; nothing to decide");
        return None;
    }

    let decision = Rule::iter().find_map(|rule| {
        rule.propose(state, me, &mut *rng)
            .map(|cell| Decision { cell, rule })
    });

    if let Some(decision) = decision {
        debug!(%decision, "Engine chose move");
    }
    decision
}

/// Picks a move for `me`.
///
/// The result is always an empty, on-board cell.
///
/// # Panics
///
/// Panics if the board is full. Callers check
/// [`BoardState::is_game_over`] before asking for a move.
pub fn choose_move<R: Rng + ?Sized>(state: &BoardState, me: Player, rng: &mut R) -> Cell {
    assert!(!state.is_full(), "choose_move called on a full board");
    decide(state, me, rng)
        .map(|decision| decision.cell)
        .expect("empty-side rule covers every non-full board")
}

/// Move chooser owning its random source.
///
/// A convenience over [`decide`] for callers that keep one engine per game
/// session.
#[derive(Debug, Clone)]
pub struct DecisionEngine<R = StdRng> {
    rng: R,
}

impl DecisionEngine<StdRng> {
    /// Engine seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Engine with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DecisionEngine<R> {
    /// Wraps a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// See [`decide`].
    pub fn decide(&mut self, state: &BoardState, me: Player) -> Option<Decision> {
        decide(state, me, &mut self.rng)
    }

    /// See [`choose_move`].
    pub fn choose_move(&mut self, state: &BoardState, me: Player) -> Cell {
        choose_move(state, me, &mut self.rng)
    }
}
