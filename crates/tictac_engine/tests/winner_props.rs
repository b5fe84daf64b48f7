//! Property tests for win detection.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use tictac_engine::rules::{LINES, any_winning_line, winning_line};
use tictac_engine::{Board, Cell, Coord, GameEngine, MoveOutcome, PlayerId};

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(PlayerId::One)),
        Just(Cell::Occupied(PlayerId::Two)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell_strategy()).prop_map(|cells| {
        let mut board = Board::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some(at) = Coord::from_index(index) {
                board.set(at, cell);
            }
        }
        board
    })
}

/// Brute-force reference: does `seat` own all three cells of some line?
fn owns_a_line(board: &Board, seat: PlayerId) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&at| board.get(at) == Cell::Occupied(seat)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A line is reported iff one seat fills a row, column or diagonal.
    #[test]
    fn winner_iff_uniform_line(board in board_strategy()) {
        for seat in PlayerId::iter() {
            let found = winning_line(&board, seat);
            prop_assert_eq!(found.is_some(), owns_a_line(&board, seat));
            if let Some(line) = found {
                for at in line {
                    prop_assert_eq!(board.get(at), Cell::Occupied(seat));
                }
            }
        }
        let any = any_winning_line(&board).is_some();
        prop_assert_eq!(
            any,
            owns_a_line(&board, PlayerId::One) || owns_a_line(&board, PlayerId::Two)
        );
    }

    /// Random legal play never breaks the occupied-count invariant and
    /// always alternates turns.
    #[test]
    fn random_play_keeps_invariants(order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = GameEngine::default();
        for index in order {
            let mover = engine.current_seat();
            let outcome = engine.apply_index(index).expect("cells are visited once");
            prop_assert_eq!(engine.board().occupied_count(), engine.moves_played());
            match outcome {
                MoveOutcome::Continued => prop_assert_eq!(engine.current_seat(), mover.other()),
                MoveOutcome::Won(line) => {
                    let symbol = engine.player(mover).symbol().clone();
                    prop_assert_eq!(engine.check_winner(&symbol), Some(line));
                    break;
                }
                MoveOutcome::Drawn => {
                    prop_assert!(engine.is_draw());
                    break;
                }
            }
        }
    }
}
