//! Key handling in the full-screen app, without a terminal.

use crossterm::event::KeyCode;
use tictac::tui::{App, Mode};
use tictac_engine::{Coord, GameEngine, PlayerId, RoundStatus};

fn app() -> App {
    App::new(GameEngine::default(), None)
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_arrows_and_enter_place_a_mark() {
    let mut app = app();
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

    assert_eq!(app.cursor(), Coord { row: 0, col: 0 });
    assert_eq!(app.engine().board_snapshot()[0][0].as_deref(), Some("X"));
    assert_eq!(app.status_message(), "Player O's turn [O]");
}

#[test]
fn test_digit_keys_play_a_round() {
    let mut app = app();
    type_text(&mut app, "14253");

    assert!(matches!(
        app.engine().status(),
        RoundStatus::Won { seat: PlayerId::One, .. }
    ));
    assert!(app.status_message().contains("Player X wins this round!"));
    assert_eq!(*app.engine().player(PlayerId::One).score(), 1);

    // Further moves are refused until the next round
    type_text(&mut app, "9");
    assert_eq!(app.status_message(), "The round is already over");

    type_text(&mut app, "n");
    assert_eq!(app.engine().status(), RoundStatus::NotStarted);
    assert_eq!(*app.engine().player(PlayerId::One).score(), 1);
}

#[test]
fn test_occupied_cell_reports_error() {
    let mut app = app();
    type_text(&mut app, "55");

    assert!(app.status_message().contains("already filled"));
    assert_eq!(app.engine().moves_played(), 1);
}

#[test]
fn test_reset_scores_needs_confirmation() {
    let mut app = app();
    type_text(&mut app, "14253");

    type_text(&mut app, "r");
    assert_eq!(app.mode(), &Mode::ConfirmReset);
    type_text(&mut app, "n");
    assert_eq!(app.mode(), &Mode::Playing);
    assert_eq!(*app.engine().player(PlayerId::One).score(), 1);

    type_text(&mut app, "ry");
    assert_eq!(*app.engine().player(PlayerId::One).score(), 0);
    assert_eq!(app.engine().moves_played(), 0);
}

#[test]
fn test_setup_form_renames_players() {
    let mut app = app();
    type_text(&mut app, "p");
    assert!(matches!(app.mode(), Mode::Setup(_)));

    for _ in 0.."Player X".len() {
        app.handle_key(KeyCode::Backspace);
    }
    type_text(&mut app, "Ann");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.mode(), &Mode::Playing);
    assert_eq!(app.engine().player(PlayerId::One).name(), "Ann");
    assert!(app.status_message().contains("Ann's turn"));
}

#[test]
fn test_setup_form_keeps_open_on_conflict() {
    let mut app = app();
    type_text(&mut app, "p");

    // Give player one the same symbol as player two
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Backspace);
    type_text(&mut app, "O");
    app.handle_key(KeyCode::Enter);

    match app.mode() {
        Mode::Setup(form) => assert!(form.error().is_some()),
        other => panic!("expected setup form, got {other:?}"),
    }
    assert_eq!(app.engine().player(PlayerId::One).symbol(), "X");

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.mode(), &Mode::Playing);
}

#[test]
fn test_quit() {
    let mut app = app();
    assert!(!app.should_quit());
    type_text(&mut app, "q");
    assert!(app.should_quit());
}
