//! Input-syntax errors raised at the engine boundary.
//!
//! Rule violations are not errors here; see [`crate::MoveError`].

use super::piece::Piece;

/// Failure to decode text or raw values into engine types.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Cell text did not match `[a-d][1-4]`.
    #[display("Invalid cell '{}' (expected a column a-d followed by a row 1-4)", _0)]
    InvalidCell(String),

    /// Piece text or code was not an integer in `0..16`.
    #[display("Invalid piece '{}' (expected a code from 0 to 15)", _0)]
    InvalidPiece(String),

    /// A board did not have exactly 16 slots.
    #[display("Board must have exactly 16 slots, got {}", _0)]
    BoardLength(usize),

    /// The same piece appeared in more than one slot.
    #[display("Piece {} appears more than once on the board", _0)]
    DuplicatePiece(Piece),

    /// A renderer key was structurally malformed.
    #[display("Invalid render key: {}", _0)]
    InvalidRenderKey(String),

    /// Ruleset name was neither `basic` nor `advanced`.
    #[display("Invalid ruleset '{}' (expected basic or advanced)", _0)]
    InvalidRuleset(String),
}

impl std::error::Error for ParseError {}
