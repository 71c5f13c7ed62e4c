//! Tactic Toe terminal front end
//!
//! Configuration, command-line parsing and the interactive loop used by the
//! `tactic_toe` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod repl;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use logging::{init_tracing, subscriber};
pub use repl::{Command, Input, Repl, ReplError};
