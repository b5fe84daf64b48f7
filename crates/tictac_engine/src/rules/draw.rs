//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELL_COUNT
}
