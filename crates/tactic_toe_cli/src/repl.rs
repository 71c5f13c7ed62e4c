//! Line-oriented game loop.
//!
//! Each line is either a cell (keypad digit `1`-`9` or `row col`) or one of
//! the [`Command`]s. The loop is generic over its reader and writer so it
//! runs the same against a terminal and a test script.

use derive_more::{Display, Error, From};
use rand::Rng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tactic_toe::{Cell, GameSession, Turn};
use tracing::{debug, info, instrument};

/// Non-move input understood by the loop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    /// Take back the last exchange.
    Undo,
    /// Replay an exchange taken back by undo.
    Redo,
    /// Start a new game.
    Reset,
    /// Show the board.
    Board,
    /// Print the position as JSON.
    Json,
    /// List commands.
    Help,
    /// Leave the game.
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

impl Command {
    /// One-line description for the help text.
    pub fn describe(self) -> &'static str {
        match self {
            Command::Undo => "take back your last move and the reply",
            Command::Redo => "replay a move taken back by undo",
            Command::Reset => "start a new game",
            Command::Board => "show the board",
            Command::Json => "print the position as JSON",
            Command::Help => "show this help",
            Command::Quit => "leave the game",
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A command word.
    Command(Command),
    /// A cell to play.
    Play(Cell),
}

impl Input {
    /// Parses a line; `None` if it is neither a command nor a cell.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        line.parse::<Command>()
            .map(Input::Command)
            .ok()
            .or_else(|| Cell::parse(line).map(Input::Play))
    }
}

/// Failure writing to the terminal or encoding a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    /// The board snapshot could not be encoded.
    #[display("Failed to encode board: {_0}")]
    Json(serde_json::Error),
}

/// Interactive game against the engine.
#[derive(Debug)]
pub struct Repl<R = StdRng> {
    session: GameSession<R>,
    show_help: bool,
}

impl<R: Rng> Repl<R> {
    /// Wraps a session; `show_help` prints the command list up front.
    pub fn new(session: GameSession<R>, show_help: bool) -> Self {
        Self { session, show_help }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Reads lines until `quit` or end of input.
    ///
    /// Bad input is reported on `out` and the loop carries on; only I/O and
    /// encoding failures end it early.
    #[instrument(skip_all)]
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> Result<(), ReplError> {
        info!("Starting game loop");
        if self.show_help {
            self.print_help(out)?;
        }
        self.print_board(out)?;
        prompt(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                prompt(out)?;
                continue;
            }

            match Input::parse(&line) {
                Some(Input::Command(Command::Quit)) => {
                    writeln!(out, "Bye!")?;
                    info!("Player quit");
                    return Ok(());
                }
                Some(input) => self.handle(input, out)?,
                None => {
                    debug!(line = %line.trim(), "Unrecognized input");
                    writeln!(
                        out,
                        "Unrecognized input '{}'. Type 'help' for commands.",
                        line.trim()
                    )?;
                }
            }
            prompt(out)?;
        }

        info!("Input closed");
        Ok(())
    }

    fn handle<W: Write>(&mut self, input: Input, out: &mut W) -> Result<(), ReplError> {
        match input {
            Input::Play(cell) => match self.session.play(cell) {
                Ok(turn) => self.report_turn(turn, out)?,
                Err(err) => writeln!(out, "Invalid move: {err}")?,
            },
            Input::Command(Command::Undo) => {
                let undone = self.session.undo();
                if undone.is_empty() {
                    writeln!(out, "Nothing to undo.")?;
                } else {
                    writeln!(out, "Took back {} move(s).", undone.len())?;
                    self.print_board(out)?;
                }
            }
            Input::Command(Command::Redo) => {
                let redone = self.session.redo();
                if redone.is_empty() {
                    writeln!(out, "Nothing to redo.")?;
                } else {
                    writeln!(out, "Replayed {} move(s).", redone.len())?;
                    self.print_board(out)?;
                }
            }
            Input::Command(Command::Reset) => {
                self.session.reset();
                writeln!(out, "New game.")?;
                self.print_board(out)?;
            }
            Input::Command(Command::Board) => self.print_board(out)?,
            Input::Command(Command::Json) => {
                let json = serde_json::to_string_pretty(&self.session.state().snapshot())?;
                writeln!(out, "{json}")?;
            }
            Input::Command(Command::Help) => self.print_help(out)?,
            Input::Command(Command::Quit) => {}
        }
        Ok(())
    }

    fn report_turn<W: Write>(&mut self, turn: Turn, out: &mut W) -> Result<(), ReplError> {
        if let Some(decision) = turn.reply {
            writeln!(
                out,
                "{} plays {} [{}]",
                self.session.ai(),
                decision.cell,
                decision.rule
            )?;
        }
        self.print_board(out)?;

        if turn.status.is_over() {
            writeln!(out, "{}", turn.status)?;
            self.session.reset();
            writeln!(out, "New game.")?;
            self.print_board(out)?;
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), ReplError> {
        writeln!(out, "{}", self.session.state().board())?;
        Ok(())
    }

    fn print_help<W: Write>(&self, out: &mut W) -> Result<(), ReplError> {
        writeln!(
            out,
            "You play {}. Enter a cell as 1-9 (keypad order) or 'row col' (0-2).",
            self.session.human()
        )?;
        for command in Command::iter() {
            writeln!(out, "  {:<6} {}", command.to_string(), command.describe())?;
        }
        Ok(())
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<(), ReplError> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("undo"), Some(Input::Command(Command::Undo)));
        assert_eq!(Input::parse("  REDO "), Some(Input::Command(Command::Redo)));
        assert_eq!(Input::parse("json"), Some(Input::Command(Command::Json)));
        assert_eq!(Input::parse("exit"), Some(Input::Command(Command::Quit)));
        assert_eq!(Input::parse("q"), Some(Input::Command(Command::Quit)));
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(Input::parse("5"), Some(Input::Play(Cell::CENTER)));
        assert_eq!(Input::parse("1"), Some(Input::Play(Cell::new(0, 0))));
        assert_eq!(Input::parse("2 1"), Some(Input::Play(Cell::new(2, 1))));
        assert_eq!(Input::parse("0,2"), Some(Input::Play(Cell::new(0, 2))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Input::parse("0"), None);
        assert_eq!(Input::parse("10"), None);
        assert_eq!(Input::parse("3 3"), None);
        assert_eq!(Input::parse("dance"), None);
    }

    #[test]
    fn test_command_names() {
        let names: Vec<String> = Command::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["undo", "redo", "reset", "board", "json", "help", "quit"]);
    }
}
