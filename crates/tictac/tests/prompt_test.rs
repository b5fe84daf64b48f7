//! Scripted sessions of the line-prompt edition.

use std::io::Cursor;
use tictac::{AppConfig, PromptGame};
use tictac_engine::Scoreboard;

fn play(script: &str) -> (Scoreboard, String) {
    let config = AppConfig::default().without_sound();
    let mut output = Vec::new();
    let scoreboard = PromptGame::new(Cursor::new(script.to_string()), &mut output, &config)
        .run()
        .expect("prompt session runs");
    (scoreboard, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_scripted_win_updates_scoreboard() {
    let (scoreboard, output) = play("Ann\nX\nBob\nO\n0\n3\n1\n4\n2\nn\n");

    assert!(output.contains("wins this round!"));
    assert!(output.contains("Ann: 1"));
    assert!(output.contains("Bob: 0"));
    assert!(output.contains("Play again? (y/n)"));
    assert_eq!(scoreboard.players[0], ("Ann".to_string(), 1));
    assert_eq!(scoreboard.players[1], ("Bob".to_string(), 0));
    assert_eq!(scoreboard.draws, 0);
}

#[test]
fn test_invalid_positions_are_reprompted() {
    let (scoreboard, output) = play("Ann\nX\nBob\nO\n9\nabc\n0\n0\n3\n1\n4\n2\nn\n");

    assert!(output.contains("Must be between 0-8"));
    assert!(output.contains("That position is already filled"));
    assert!(output.matches("Choose a position (0-8)").count() >= 8);
    assert_eq!(scoreboard.players[0].1, 1);
}

#[test]
fn test_conflicting_second_player_is_asked_again() {
    let (scoreboard, output) = play("Ann\nX\nAnn\nO\nBob\nX\nBob\nO\n");

    assert!(output.contains("Both players are named \"Ann\""));
    assert!(output.contains("Both players use the symbol \"X\""));
    assert_eq!(output.matches("Player 2, enter your name").count(), 3);
    assert_eq!(scoreboard.players[1], ("Bob".to_string(), 0));
}

#[test]
fn test_blank_answers_use_configured_players() {
    let (scoreboard, output) = play("\n\n\n\n");

    assert!(output.contains("Player X's turn [X]"));
    assert_eq!(scoreboard.players[0].0, "Player X");
    assert_eq!(scoreboard.players[1].0, "Player O");
}

#[test]
fn test_draw_then_play_again() {
    let (scoreboard, output) = play("Ann\nX\nBob\nO\n0\n1\n2\n4\n3\n5\n7\n6\n8\ny\n4\n");

    assert!(output.contains("It's a draw!"));
    assert!(output.contains("Draws: 1"));
    assert_eq!(scoreboard.draws, 1);
    assert_eq!(scoreboard.players[0].1, 0);
    assert_eq!(scoreboard.players[1].1, 0);
}

#[test]
fn test_closed_input_ends_quietly() {
    let (scoreboard, output) = play("");

    assert!(output.contains("Player 1, enter your name"));
    assert_eq!(scoreboard, tictac_engine::GameEngine::default().scoreboard());
}
