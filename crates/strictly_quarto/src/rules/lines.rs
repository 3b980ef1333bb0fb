//! Line geometry: which four-cell sets can win.

use super::super::cell::{Cell, SIDE};
use super::super::game::Ruleset;
use serde::{Deserialize, Serialize};

/// Shape of a winning line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// Four cells in a row.
    Row,
    /// Four cells in a column.
    Column,
    /// One of the two long diagonals.
    Diagonal,
    /// A 2x2 block (advanced rules only).
    Square,
}

/// A four-cell line on the board.
///
/// `index` is the row number for rows, the column number for columns,
/// `0` (a1-d4) or `1` (d1-a4) for diagonals, and the top-left cell
/// index for squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    index: usize,
    cells: [usize; 4],
}

impl Line {
    /// Row `r` (0-3).
    pub const fn row(r: usize) -> Self {
        let first = r * SIDE;
        Self {
            kind: LineKind::Row,
            index: r,
            cells: [first, first + 1, first + 2, first + 3],
        }
    }

    /// Column `c` (0-3).
    pub const fn column(c: usize) -> Self {
        Self {
            kind: LineKind::Column,
            index: c,
            cells: [c, c + SIDE, c + 2 * SIDE, c + 3 * SIDE],
        }
    }

    /// Diagonal `0` runs a1-d4, any other value selects d1-a4.
    pub const fn diagonal(d: usize) -> Self {
        if d == 0 {
            Self {
                kind: LineKind::Diagonal,
                index: 0,
                cells: [0, 5, 10, 15],
            }
        } else {
            Self {
                kind: LineKind::Diagonal,
                index: 1,
                cells: [3, 6, 9, 12],
            }
        }
    }

    /// The 2x2 square whose top-left cell is at row `r`, column `c` (both 0-2).
    pub const fn square(r: usize, c: usize) -> Self {
        let first = r * SIDE + c;
        Self {
            kind: LineKind::Square,
            index: first,
            cells: [first, first + 1, first + SIDE, first + SIDE + 1],
        }
    }

    /// Line shape.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Position of the line among lines of its kind.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Board indices covered by the line.
    pub fn cells(&self) -> [usize; 4] {
        self.cells
    }

    /// Whether the line covers the cell.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell.index())
    }
}

/// All four rows, top to bottom by index.
pub fn rows() -> impl Iterator<Item = Line> {
    (0..SIDE).map(Line::row)
}

/// All four columns.
pub fn columns() -> impl Iterator<Item = Line> {
    (0..SIDE).map(Line::column)
}

/// Both diagonals.
pub fn diagonals() -> impl Iterator<Item = Line> {
    [Line::diagonal(0), Line::diagonal(1)].into_iter()
}

/// All nine 2x2 squares, row-major by top-left cell.
pub fn squares() -> impl Iterator<Item = Line> {
    (0..SIDE - 1).flat_map(|r| (0..SIDE - 1).map(move |c| Line::square(r, c)))
}

/// Every line that can win under the ruleset, in check order.
pub fn all_lines(ruleset: Ruleset) -> Vec<Line> {
    let mut lines: Vec<Line> = rows().chain(columns()).chain(diagonals()).collect();
    if ruleset.squares_win() {
        lines.extend(squares());
    }
    lines
}

/// Lines passing through `cell`, in check order: row, column,
/// diagonal(s), then (advanced only) squares.
pub fn lines_through(cell: Cell, ruleset: Ruleset) -> Vec<Line> {
    let mut lines = vec![Line::row(cell.row()), Line::column(cell.column())];
    if cell.on_main_diagonal() {
        lines.push(Line::diagonal(0));
    }
    if cell.on_anti_diagonal() {
        lines.push(Line::diagonal(1));
    }
    if ruleset.squares_win() {
        lines.extend(squares().filter(|square| square.contains(cell)));
    }
    lines
}
