//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Seat of a player in the game.
///
/// Turn tracking compares seats, never player values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum PlayerId {
    /// First seat; moves first in every round.
    #[strum(to_string = "player one")]
    One,
    /// Second seat.
    #[strum(to_string = "player two")]
    Two,
}

impl PlayerId {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index of this seat in a two-element player array.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a seat.
    Occupied(PlayerId),
}

impl Cell {
    /// Seat occupying this cell, if any.
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

/// A (row, col) board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate, returning `None` when it falls off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Row-major index (0-8) of this coordinate.
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }
}

/// Three coordinates forming a row, column or diagonal.
pub type Line = [Coord; 3];

/// Rendering-friendly view of the board: each cell holds the occupant's symbol.
pub type BoardSnapshot = [[Option<String>; BOARD_SIZE]; BOARD_SIZE];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        Coord::all().filter(|&at| !self.is_empty(at)).count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
