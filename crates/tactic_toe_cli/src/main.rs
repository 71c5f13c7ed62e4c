//! Tactic Toe - play tic-tac-toe against a rule-based AI in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tactic_toe::GameSession;
use tactic_toe_cli::{Cli, Config, Repl, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;
    init_tracing(cli.log.is_some(), config.log_filter());
    config.log_resolved();

    let session = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded AI");
            GameSession::seeded(*seed)
        }
        None => GameSession::new(),
    };

    let mut repl = Repl::new(session, *config.show_help_on_start());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
