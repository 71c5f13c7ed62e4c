//! Scripted games through the interactive loop.

use std::io::Cursor;
use tactic_toe::{GameSession, Snapshot};
use tactic_toe_cli::Repl;

fn run_script(seed: u64, script: &str) -> (String, Repl) {
    let mut repl = Repl::new(GameSession::seeded(seed), false);
    let mut out = Vec::new();
    repl.run(Cursor::new(script), &mut out).expect("in-memory I/O");
    (String::from_utf8(out).expect("utf-8 output"), repl)
}

#[test]
fn test_engine_wins_and_game_resets() {
    // X: 1, 2, 4. O takes the center, blocks at 3, then completes 3-5-7.
    let (out, repl) = run_script(0, "1\n2\n4\n");

    assert!(out.contains("O plays (1, 1) [center]"), "{out}");
    assert!(out.contains("O plays (0, 2) [block]"), "{out}");
    assert!(out.contains("O plays (2, 0) [win]"), "{out}");
    assert!(out.contains("O won!"), "{out}");
    assert!(out.contains("New game."), "{out}");
    assert!(repl.session().state().history().is_empty());
}

#[test]
fn test_drawn_game_reports_tie() {
    let (out, repl) = run_script(0, "1\n9\n8\n3\n4\n");

    assert!(out.contains("[block-fork]"), "{out}");
    assert!(out.contains("Game is tied!"), "{out}");
    assert!(!out.contains("won!"), "{out}");
    assert!(repl.session().state().history().is_empty());
}

#[test]
fn test_invalid_input_keeps_the_loop_alive() {
    let (out, repl) = run_script(0, "dance\n5\n5\n0 9\n");

    assert!(out.contains("Unrecognized input 'dance'"), "{out}");
    assert!(out.contains("Invalid move: Cell (1, 1) is already occupied by X"), "{out}");
    assert!(out.contains("Unrecognized input '0 9'"), "{out}");
    assert_eq!(repl.session().state().history().len(), 2);
}

#[test]
fn test_undo_and_redo_whole_exchanges() {
    let (out, repl) = run_script(0, "1\nundo\nundo\nredo\nredo\n");

    assert!(out.contains("Took back 2 move(s)."), "{out}");
    assert!(out.contains("Nothing to undo."), "{out}");
    assert!(out.contains("Replayed 2 move(s)."), "{out}");
    assert!(out.contains("Nothing to redo."), "{out}");
    assert_eq!(repl.session().state().history().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (out, repl) = run_script(0, "quit\n5\n");

    assert!(out.contains("Bye!"), "{out}");
    assert!(repl.session().state().history().is_empty());
}

#[test]
fn test_json_snapshot_round_trips() {
    let (out, _) = run_script(0, "5\njson\n");

    let start = out.find('{').expect("json object in output");
    let end = out.rfind('}').expect("json object in output");
    let snapshot: Snapshot = serde_json::from_str(&out[start..=end]).expect("valid snapshot");

    assert_eq!(snapshot.history.len(), 2);
    assert!(snapshot.redo.is_empty());
    assert_eq!(snapshot.current_turn, tactic_toe::Player::Cross);
}

#[test]
fn test_help_lists_every_command() {
    let mut repl = Repl::new(GameSession::seeded(0), true);
    let mut out = Vec::new();
    repl.run(Cursor::new(""), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    for word in ["undo", "redo", "reset", "board", "json", "help", "quit"] {
        assert!(out.contains(word), "missing {word} in:\n{out}");
    }
    assert!(out.contains("You play X."), "{out}");
}

#[test]
fn test_reset_clears_the_board() {
    let (out, repl) = run_script(0, "1\nreset\n");

    assert!(out.contains("New game."), "{out}");
    assert!(repl.session().state().history().is_empty());
    assert!(!repl.session().state().can_redo());
}
