//! The 4x4 Quarto board.

use super::cell::{BOARD_SIZE, Cell, SIDE};
use super::error::ParseError;
use super::piece::Piece;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Sixteen slots in index order, each empty or holding a piece.
///
/// Serialized as a flat list of slots; deserializing validates it like
/// [`Board::from_slots`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")]
pub struct Board {
    slots: [Option<Piece>; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            slots: [None; BOARD_SIZE],
        }
    }

    /// Builds a board from externally supplied slots.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::BoardLength`] unless there are exactly 16
    /// slots, and [`ParseError::DuplicatePiece`] if a piece repeats.
    #[instrument]
    pub fn from_slots(slots: &[Option<Piece>]) -> Result<Self, ParseError> {
        let slots: [Option<Piece>; BOARD_SIZE] = slots
            .try_into()
            .map_err(|_| ParseError::BoardLength(slots.len()))?;
        let board = Self { slots };
        if let Some(piece) = board.first_duplicate() {
            return Err(ParseError::DuplicatePiece(piece));
        }
        Ok(board)
    }

    /// Piece at `index`, or `None` when the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Piece> {
        self.slots.get(index).copied().flatten()
    }

    /// Piece on the given cell.
    pub fn at(&self, cell: Cell) -> Option<Piece> {
        self.get(cell.index())
    }

    /// Writes a piece into a slot.
    pub(crate) fn place(&mut self, cell: Cell, piece: Piece) {
        self.slots[cell.index()] = Some(piece);
    }

    /// Whether the cell holds no piece.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.at(cell).is_none()
    }

    /// Whether the piece has been placed anywhere.
    pub fn contains(&self, piece: Piece) -> bool {
        self.slots.contains(&Some(piece))
    }

    /// Returns all slots.
    pub fn slots(&self) -> &[Option<Piece>; BOARD_SIZE] {
        &self.slots
    }

    /// The four slots at the given indices.
    pub fn pieces_at(&self, indices: [usize; 4]) -> [Option<Piece>; 4] {
        indices.map(|index| self.get(index))
    }

    /// Pieces not yet on the board, ascending.
    pub fn remaining_pieces(&self) -> Vec<Piece> {
        Piece::all().filter(|piece| !self.contains(*piece)).collect()
    }

    /// Empty cells, in index order.
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_empty(*cell)).collect()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether every slot is filled.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE
    }

    /// Whether no piece value repeats.
    pub fn is_well_formed(&self) -> bool {
        self.first_duplicate().is_none()
    }

    fn first_duplicate(&self) -> Option<Piece> {
        let mut seen = [false; BOARD_SIZE];
        for piece in self.slots.iter().flatten() {
            let code = piece.code() as usize;
            if seen[code] {
                return Some(*piece);
            }
            seen[code] = true;
        }
        None
    }

    /// Formats the board as a text grid, row 4 on top.
    ///
    /// ```text
    ///    a  b  c  d
    /// 4  .  .  .  .
    /// 3  .  .  .  .
    /// 2  .  6  .  .
    /// 1 12  .  .  0
    /// ```
    pub fn display(&self) -> String {
        let mut result = String::from("   a  b  c  d\n");
        for row in (0..SIDE).rev() {
            result.push_str(&(row + 1).to_string());
            for column in 0..SIDE {
                match self.get(column + row * SIDE) {
                    Some(piece) => result.push_str(&format!("{:>3}", piece.code())),
                    None => result.push_str("  ."),
                }
            }
            if row > 0 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = ParseError;

    fn try_from(slots: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        Self::from_slots(&slots)
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.slots.to_vec()
    }
}
