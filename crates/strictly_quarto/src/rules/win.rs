//! Win detection.
//!
//! A line wins when its four pieces agree on any single attribute: all
//! tall, all round, and so on. Detection is incremental: after a
//! placement only the lines through that cell can have become winning,
//! so a claim checks the lines through the recorded placements instead
//! of scanning the whole board.

use super::super::board::Board;
use super::super::cell::Cell;
use super::super::game::{Game, Ruleset};
use super::super::piece::{Attribute, Piece};
use super::lines::{Line, LineKind, all_lines, lines_through};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A line found to be winning, with the attribute its pieces share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    line: Line,
    attribute: Attribute,
}

impl WinningLine {
    /// The winning line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Line shape (`row`, `column`, `diagonal` or `square`).
    pub fn win_type(&self) -> LineKind {
        self.line.kind()
    }

    /// Position of the line among lines of its kind.
    pub fn win_index(&self) -> usize {
        self.line.index()
    }

    /// Board indices of the four winning cells.
    pub fn winning_fields(&self) -> [usize; 4] {
        self.line.cells()
    }

    /// The attribute all four pieces share (the first by bit order).
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }
}

/// The first attribute, by bit position, shared by all four pieces.
///
/// Returns `None` if any slot is empty or no attribute is uniform.
pub fn common_attribute(pieces: &[Option<Piece>; 4]) -> Option<Attribute> {
    let [Some(first), Some(second), Some(third), Some(fourth)] = *pieces else {
        return None;
    };
    Attribute::iter().find(|attribute| {
        [second, third, fourth]
            .iter()
            .all(|piece| first.shares(*piece, *attribute))
    })
}

/// Checks whether four pieces form a winning line.
///
/// False whenever any slot is empty.
#[instrument(level = "trace")]
pub fn is_winning_line(pieces: &[Option<Piece>; 4]) -> bool {
    common_attribute(pieces).is_some()
}

fn check_line(board: &Board, line: Line) -> Option<WinningLine> {
    common_attribute(&board.pieces_at(line.cells())).map(|attribute| WinningLine { line, attribute })
}

/// Checks only the lines through `cell`.
///
/// Order is row, column, diagonal, square; the first winning line is
/// reported and later ones are ignored.
#[instrument(skip(board))]
pub fn check_lines_through(board: &Board, cell: Cell, ruleset: Ruleset) -> Option<WinningLine> {
    let found = lines_through(cell, ruleset)
        .into_iter()
        .find_map(|line| check_line(board, line));
    if let Some(win) = &found {
        debug!(
            win_type = %win.win_type(),
            win_index = win.win_index(),
            attribute = %win.attribute(),
            "Winning line found"
        );
    }
    found
}

/// Checks the lines through every placement still awaiting a claim.
///
/// The most recent placement is checked first.
#[instrument(skip(game))]
pub fn has_winning_position(game: &Game) -> Option<WinningLine> {
    game.placement_history()
        .iter()
        .flatten()
        .find_map(|cell| check_lines_through(game.board(), *cell, game.ruleset()))
}

/// Scans the whole board: all rows, all columns, diagonals, then squares.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, ruleset: Ruleset) -> Option<WinningLine> {
    all_lines(ruleset)
        .into_iter()
        .find_map(|line| check_line(board, line))
}
