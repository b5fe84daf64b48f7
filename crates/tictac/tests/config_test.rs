//! Loading configuration files from disk.

use std::io::Write;
use std::path::PathBuf;
use tictac::{AppConfig, build_engine};
use tictac_engine::PlayerId;

const FULL_CONFIG: &str = r##"
log_file = "game.log"

[player_one]
name = "Ann"
symbol = "A"
color = "green"

[player_two]
name = "Bob"
symbol = "B"
color = "#123456"

[sound]
enabled = false
command = "aplay"
win_file = "sounds/cheer.wav"
"##;

#[test]
fn test_from_file_reads_all_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.player_one().name(), "Ann");
    assert_eq!(config.player_two().color(), "#123456");
    assert!(!config.sound().enabled());
    assert_eq!(config.sound().command().as_deref(), Some("aplay"));
    assert_eq!(config.sound().win_file(), &PathBuf::from("sounds/cheer.wav"));
    assert_eq!(config.sound().move_file(), &PathBuf::from("click.mp3"));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_resolve_explicit_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = AppConfig::resolve(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[player_one\nname = ").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_file_players_reach_the_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::from_file(file.path()).unwrap();

    let (engine, conflict) = build_engine(&config);

    assert!(conflict.is_none());
    assert_eq!(engine.player(PlayerId::One).symbol(), "A");
    assert_eq!(engine.player(PlayerId::Two).name(), "Bob");
}

#[test]
fn test_partial_player_sections_fill_seat_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[player_one]\nname = \"Ann\"\n\n[player_two]\nsymbol = \"@\"\n")
        .unwrap();
    let config = AppConfig::from_file(file.path()).unwrap();

    let (engine, conflict) = build_engine(&config);

    assert!(conflict.is_none());
    assert_eq!(engine.player(PlayerId::One).name(), "Ann");
    assert_eq!(engine.player(PlayerId::One).symbol(), "X");
    assert_eq!(engine.player(PlayerId::Two).name(), "Player O");
    assert_eq!(engine.player(PlayerId::Two).symbol(), "@");
}
