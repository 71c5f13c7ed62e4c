//! Command-line interface for tactic_toe.

use clap::Parser;
use std::path::PathBuf;

/// Tactic Toe - play tic-tac-toe against a rule-based opponent
#[derive(Parser, Debug, Default)]
#[command(name = "tactic_toe")]
#[command(about = "Play tic-tac-toe in the terminal against a rule-based AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the AI's random corner and side choices
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Tracing filter, e.g. "debug" or "tactic_toe=trace"
    #[arg(long)]
    pub log: Option<String>,
}
