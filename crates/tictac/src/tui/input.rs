//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_engine::{BOARD_SIZE, Coord};

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let last = BOARD_SIZE - 1;
    let Coord { row, col } = cursor;

    match key {
        KeyCode::Up if row > 0 => Coord { row: row - 1, col },
        KeyCode::Down if row < last => Coord { row: row + 1, col },
        KeyCode::Left if col > 0 => Coord { row, col: col - 1 },
        KeyCode::Right if col < last => Coord { row, col: col + 1 },
        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Cell for a digit key `1`-`9`, numbered left to right, top to bottom.
pub fn digit_cell(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coord::from_index)
}
