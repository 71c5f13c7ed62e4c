//! Tactic Toe - tic-tac-toe against a rule-based opponent
//!
//! The crate tracks a 3x3 board with full undo/redo history, detects wins
//! and draws, and picks the opponent's moves from a fixed priority of
//! tactics (win, block, fork, block a fork, center, opposite corner, empty
//! corner, empty side).
//!
//! # Architecture
//!
//! - **BoardState**: grid, turn, history and redo stacks
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **Engine**: the ordered tactic chain ([`engine::decide`])
//! - **Session**: human/engine ply pairs for front ends ([`GameSession`])
//!
//! Rendering, input mapping and end-of-game dialogs belong to the caller.
//!
//! # Example
//!
//! ```
//! use tactic_toe::{Cell, GameSession, GameStatus};
//!
//! let mut session = GameSession::seeded(42);
//! let turn = session.play(Cell::new(0, 0))?;
//! assert_eq!(turn.status, GameStatus::InProgress);
//! assert_eq!(turn.reply.map(|d| d.cell), Some(Cell::CENTER));
//! # Ok::<(), tactic_toe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod mark;
mod session;
mod state;

pub mod engine;
pub mod invariants;
pub mod rules;

pub use action::{InvalidMove, Move};
pub use board::Board;
pub use cell::Cell;
pub use engine::{Decision, DecisionEngine, Rule};
pub use mark::{Mark, Player};
pub use session::{GameSession, Turn};
pub use state::{BoardState, GameStatus, Snapshot};
