//! Board storage and cell coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{MatchError, PlayerId};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells; a game with this many moves has a full board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A validated cell coordinate, row and column each in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Validates raw coordinates.
    ///
    /// Coordinates arrive from callers as signed integers so that negative
    /// input is rejected here rather than failing to parse upstream.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if either coordinate is outside `0..3`.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Result<Self, MatchError> {
        match (Self::axis(row), Self::axis(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(MatchError::validation(format!(
                "Invalid coordinates ({row}, {col}): row and col must be between 0 and {}",
                BOARD_SIZE - 1
            ))),
        }
    }

    /// Builds a position from coordinates already known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    fn axis(value: i64) -> Option<u8> {
        u8::try_from(value)
            .ok()
            .filter(|v| usize::from(*v) < BOARD_SIZE)
    }

    /// Row index.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index.
    pub fn col(self) -> u8 {
        self.col
    }

    /// True for cells on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True for cells on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        usize::from(self.row) + usize::from(self.col) == BOARD_SIZE - 1
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; CELL_COUNT] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 board. Each cell is empty or holds the id of the player who marked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owner of the cell, if any.
    pub fn get(&self, pos: Position) -> Option<&PlayerId> {
        self.cells
            .get(usize::from(pos.row))
            .and_then(|row| row.get(usize::from(pos.col)))
            .and_then(Option::as_ref)
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Marks a cell. Callers check emptiness first.
    pub(crate) fn place(&mut self, pos: Position, player: PlayerId) {
        if let Some(cell) = self
            .cells
            .get_mut(usize::from(pos.row))
            .and_then(|row| row.get_mut(usize::from(pos.col)))
        {
            *cell = Some(player);
        }
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
