//! Scenario tests for the game engine.

use tictac_engine::{
    Coord, GameEngine, InvalidMove, MoveOutcome, PlayerId, PlayerSetup, RoundStatus,
};

fn engine() -> GameEngine {
    GameEngine::new(
        PlayerSetup::new("Ann", "X", "red"),
        PlayerSetup::new("Bob", "O", "blue"),
    )
    .expect("distinct players")
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> MoveOutcome {
    let mut last = MoveOutcome::Continued;
    for &(row, col) in moves {
        last = engine.apply_move(row, col).expect("legal move");
    }
    last
}

fn at(row: usize, col: usize) -> Coord {
    Coord { row, col }
}

#[test]
fn test_top_row_win() {
    let mut engine = engine();
    // X on turns 1, 3, 5; O elsewhere.
    let outcome = play(&mut engine, &[(0, 0), (2, 2), (0, 1), (1, 1), (0, 2)]);

    let expected = [at(0, 0), at(0, 1), at(0, 2)];
    assert_eq!(outcome, MoveOutcome::Won(expected));
    assert_eq!(engine.check_winner("X"), Some(expected));
    assert_eq!(engine.check_winner("O"), None);
    assert_eq!(
        engine.status(),
        RoundStatus::Won {
            seat: PlayerId::One,
            line: expected
        }
    );
    assert_eq!(*engine.player(PlayerId::One).score(), 1);
    assert!(!engine.is_draw());
}

#[test]
fn test_win_on_ninth_move_is_not_a_draw() {
    let mut engine = engine();
    let outcome = play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(outcome, MoveOutcome::Won([at(0, 0), at(1, 1), at(2, 2)]));
    assert_eq!(engine.moves_played(), 9);
    assert!(!engine.is_draw());
    assert_eq!(engine.draws(), 0);
    assert_eq!(*engine.player(PlayerId::One).score(), 1);
    assert_eq!(*engine.player(PlayerId::Two).score(), 0);
}

#[test]
fn test_full_board_draw() {
    let mut engine = engine();
    // X O X / X O O / O X X
    let outcome = play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(outcome, MoveOutcome::Drawn);
    assert!(engine.is_draw());
    assert_eq!(engine.check_winner("X"), None);
    assert_eq!(engine.check_winner("O"), None);
    assert_eq!(engine.moves_played(), 9);
    assert_eq!(engine.draws(), 1);
    assert_eq!(engine.status(), RoundStatus::Drawn);
}

#[test]
fn test_same_cell_twice_rejected() {
    let mut engine = engine();
    engine.apply_move(0, 0).unwrap();
    let before = engine.board().clone();

    assert_eq!(
        engine.apply_move(0, 0),
        Err(InvalidMove::Occupied { row: 0, col: 0 })
    );
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.moves_played(), 1);
    // Still O's turn after the rejected attempt.
    assert_eq!(engine.current_seat(), PlayerId::Two);
}

#[test]
fn test_move_after_win_rejected() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(engine.apply_move(2, 2), Err(InvalidMove::RoundOver));
    assert_eq!(engine.moves_played(), 5);
}

#[test]
fn test_turns_alternate_until_terminal() {
    let mut engine = engine();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2)];
    let mut expected = PlayerId::One;
    for (row, col) in moves {
        assert_eq!(engine.current_seat(), expected);
        assert_eq!(engine.apply_move(row, col), Ok(MoveOutcome::Continued));
        expected = expected.other();
    }
    assert_eq!(engine.current_player().name(), "Ann");
}

#[test]
fn test_snapshot_shows_symbols() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0), (2, 1)]);
    let snapshot = engine.board_snapshot();
    assert_eq!(snapshot[0][0].as_deref(), Some("X"));
    assert_eq!(snapshot[2][1].as_deref(), Some("O"));
    assert_eq!(snapshot[1][1], None);
}

#[test]
fn test_outcome_serializes() {
    let outcome = MoveOutcome::Won([at(0, 0), at(1, 1), at(2, 2)]);
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("Won"));
    let back: MoveOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}
