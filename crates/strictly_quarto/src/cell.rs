//! Algebraic cell coordinates on the 4x4 board.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Cells per side.
pub const SIDE: usize = 4;

/// Cells on the board.
pub const BOARD_SIZE: usize = SIDE * SIDE;

const COLUMNS: &[u8; SIDE] = b"abcd";

/// A board cell, column `a`-`d` and row `1`-`4` (both zero-indexed inside).
///
/// Serializes as its text form, e.g. `"c2"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Cell {
    row: u8,
    column: u8,
}

impl Cell {
    /// Creates a cell from zero-indexed row and column.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < SIDE && column < SIDE).then_some(Self {
            row: row as u8,
            column: column as u8,
        })
    }

    /// Creates a cell from its linear board index (`column + row * 4`).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIDE, index % SIDE)
    }

    /// Zero-indexed row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-indexed column.
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Linear board index.
    pub fn index(self) -> usize {
        self.column() + self.row() * SIDE
    }

    /// Whether the cell lies on the diagonal from `a1` to `d4`.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Whether the cell lies on the diagonal from `d1` to `a4`.
    pub fn on_anti_diagonal(self) -> bool {
        self.row() + self.column() == SIDE - 1
    }

    /// All 16 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).filter_map(Cell::from_index)
    }
}

/// Decodes `[a-d][1-4]` text into a cell.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCell`] for anything else, including
/// upper-case letters and surrounding whitespace.
#[instrument(level = "trace")]
pub fn parse_cell(text: &str) -> Result<Cell, ParseError> {
    let invalid = || ParseError::InvalidCell(text.to_string());
    let [column, row] = text.as_bytes() else {
        return Err(invalid());
    };
    let column = COLUMNS
        .iter()
        .position(|c| c == column)
        .ok_or_else(invalid)?;
    let row = match row {
        b'1'..=b'4' => usize::from(*row - b'1'),
        _ => return Err(invalid()),
    };
    Cell::new(row, column).ok_or_else(invalid)
}

/// Maps a board index back to its cell, or `None` outside `0..16`.
#[instrument(level = "trace")]
pub fn format_index(index: usize) -> Option<Cell> {
    Cell::from_index(index)
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cell(s)
    }
}

impl TryFrom<String> for Cell {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_cell(&value)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COLUMNS[self.column()] as char, self.row + 1)
    }
}
