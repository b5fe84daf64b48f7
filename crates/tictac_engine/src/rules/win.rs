//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, Line, PlayerId};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Coord {
    Coord { row, col }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the first line fully occupied by `seat`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, seat: PlayerId) -> Option<Line> {
    let mark = Cell::Occupied(seat);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&c| board.get(c) == mark))
}

/// Returns the first line fully occupied by either seat, with its owner.
#[instrument(skip(board))]
pub fn any_winning_line(board: &Board) -> Option<(PlayerId, Line)> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Occupied(seat) if cell == board.get(b) && cell == board.get(c) => {
                Some((seat, [a, b, c]))
            }
            _ => None,
        }
    })
}
