//! Tests for the headless harness: config, scripted runs and JSON output.

use noughts::{GameEngine, HarnessConfig, Marker, MarkerAssignment, Outcome, Player, Session};
use std::io::Write;

fn run(engine: GameEngine, script: &[&str], json: bool) -> (Outcome, String) {
    let mut session = Session::new(engine, Vec::new());
    let script: Vec<String> = script.iter().map(|s| s.to_string()).collect();
    session.run_script(&script).expect("script runs");
    session.print_summary(json).expect("summary prints");
    let outcome = session.engine().state().outcome();
    let text = String::from_utf8(session.into_output()).expect("utf-8 output");
    (outcome, text)
}

#[test]
fn test_configured_marker_reaches_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game]\nplayer1_marker = \"O\"\n\n[logging]\nfilter = \"debug\"").unwrap();

    let config = HarnessConfig::from_file(file.path()).unwrap();
    assert_eq!(config.logging().filter(), "debug");

    let engine = GameEngine::with_markers(MarkerAssignment::new(*config.game().player1_marker()));
    assert_eq!(engine.state().marker_for(Player::One), Marker::O);
    assert_eq!(engine.state().status(), "Next player: Player 1 (O)");
}

#[test]
fn test_cli_override_beats_file() {
    let config = HarnessConfig::default().with_player1_marker(Marker::O);
    assert_eq!(*config.game().player1_marker(), Marker::O);
}

#[test]
fn test_script_grid_output() {
    let (outcome, text) = run(GameEngine::new(), &["0", "3", "1", "4", "2"], false);
    assert_eq!(outcome, Outcome::Win(Marker::X));
    assert_eq!(text, "X|X|X\n-+-+-\nO|O|.\n-+-+-\n.|.|.\n\nX wins!\n");
}

#[test]
fn test_script_json_output() {
    let (outcome, text) = run(GameEngine::new(), &["marker 2 X", "move center"], true);
    assert_eq!(outcome, Outcome::InProgress);

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["board"][4], "O");
    assert_eq!(json["player1_marker"], "O");
    assert_eq!(json["player2_marker"], "X");
    assert_eq!(json["turn"], "Two");
    assert_eq!(json["status"], "Next player: Player 2 (X)");
}

#[test]
fn test_script_reset_keeps_markers() {
    let (outcome, text) = run(
        GameEngine::new(),
        &["marker 1 O", "0", "3", "1", "4", "2", "reset", "4"],
        false,
    );
    assert_eq!(outcome, Outcome::InProgress);
    assert!(text.starts_with(".|.|.\n-+-+-\n.|O|.\n"));
}

#[test]
fn test_script_out_of_range_fails() {
    let mut session = Session::new(GameEngine::new(), Vec::new());
    let err = session.run_script(&["9".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Step 1"));
    assert!(format!("{:#}", err).contains("out of range"));
}
