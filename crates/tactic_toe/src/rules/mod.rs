//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They carry no turn or
//! history, so both the board state and the engine's what-if probing share
//! them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, lines_through};
pub use win::check_winner;
