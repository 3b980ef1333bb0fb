//! Bit-level piece encoding.
//!
//! A piece is a code in `0..16`. Each of the four low bits is one
//! independent attribute:
//!
//! ```text
//! bit 3    bit 2     bit 1       bit 0
//! color    height    hole        shape
//! 0=black  0=short   0=holeless  0=round
//! 1=white  1=tall    1=holed     1=square
//! ```
//!
//! So `0` is the black, short, holeless, round piece and `5` is the
//! black, tall, holeless, square one.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of distinct pieces in a set.
pub const PIECE_COUNT: u8 = 16;

/// One of the four binary attributes every piece carries.
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
pub enum Attribute {
    /// Round or square (bit 0).
    Shape,
    /// Holeless or holed (bit 1).
    Hole,
    /// Short or tall (bit 2).
    Height,
    /// Black or white (bit 3).
    Color,
}

impl Attribute {
    /// Bit position of this attribute inside a piece code.
    pub const fn bit(self) -> u8 {
        match self {
            Attribute::Shape => 0,
            Attribute::Hole => 1,
            Attribute::Height => 2,
            Attribute::Color => 3,
        }
    }

    /// Attribute stored at the given bit position, if any.
    pub fn from_bit(bit: u8) -> Option<Self> {
        Attribute::iter().find(|attribute| attribute.bit() == bit)
    }

    /// Words for the cleared and set state of this attribute.
    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Attribute::Shape => ("round", "square"),
            Attribute::Hole => ("holeless", "holed"),
            Attribute::Height => ("short", "tall"),
            Attribute::Color => ("black", "white"),
        }
    }
}

/// A Quarto piece, one of 16 attribute-encoded codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Piece(u8);

impl Piece {
    /// Creates a piece from its code, or `None` if the code is not in `0..16`.
    pub const fn new(code: u8) -> Option<Self> {
        if code < PIECE_COUNT {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Returns the raw code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether the bit for `attribute` is set.
    pub const fn attribute(self, attribute: Attribute) -> bool {
        self.0 & (1 << attribute.bit()) != 0
    }

    /// Whether both pieces agree on `attribute`.
    pub const fn shares(self, other: Piece, attribute: Attribute) -> bool {
        !(self.0 ^ other.0) & (1 << attribute.bit()) != 0
    }

    /// All 16 pieces in ascending code order.
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..PIECE_COUNT).map(Piece)
    }

    /// Human-readable description, e.g. `"black tall holeless square"`.
    pub fn describe(self) -> String {
        [
            Attribute::Color,
            Attribute::Height,
            Attribute::Hole,
            Attribute::Shape,
        ]
        .iter()
        .map(|attribute| {
            let (cleared, set) = attribute.labels();
            if self.attribute(*attribute) { set } else { cleared }
        })
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Checks whether two pieces agree on the given attribute.
///
/// Symmetric and reflexive.
#[instrument(level = "trace")]
pub fn shares_attribute(a: Piece, b: Piece, attribute: Attribute) -> bool {
    a.shares(b, attribute)
}

impl TryFrom<u8> for Piece {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Piece::new(code).ok_or_else(|| ParseError::InvalidPiece(code.to_string()))
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> Self {
        piece.0
    }
}

impl FromStr for Piece {
    type Err = ParseError;

    /// Parses the decimal code `0`-`15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Piece::new)
            .ok_or_else(|| ParseError::InvalidPiece(s.to_string()))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
