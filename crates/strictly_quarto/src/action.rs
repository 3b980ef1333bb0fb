//! First-class move types for Quarto.
//!
//! Moves are requests, not part of stored state. Each carries the
//! identity of the player attempting it and a kind-specific payload.

use super::cell::Cell;
use super::game::PlayerId;
use super::piece::Piece;
use serde::{Deserialize, Serialize};

/// What a move does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum MoveKind {
    /// Put the piece on offer onto a cell.
    Place(Cell),
    /// Hand a piece to the opponent.
    OfferPiece(Piece),
    /// Claim a win on the lines through recent placements.
    Claim,
    /// Give up; the opponent wins.
    Resign,
    /// Propose a draw to the opponent.
    OfferDraw,
    /// Accept a pending draw proposal.
    AcceptDraw,
}

/// A move attempted by a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: PlayerId,
    kind: MoveKind,
}

impl Move {
    /// Creates a move.
    pub fn new(player: impl Into<PlayerId>, kind: MoveKind) -> Self {
        Self {
            player: player.into(),
            kind,
        }
    }

    /// Place the offered piece on `cell`.
    pub fn place(player: impl Into<PlayerId>, cell: Cell) -> Self {
        Self::new(player, MoveKind::Place(cell))
    }

    /// Offer `piece` to the opponent.
    pub fn offer_piece(player: impl Into<PlayerId>, piece: Piece) -> Self {
        Self::new(player, MoveKind::OfferPiece(piece))
    }

    /// Claim a win.
    pub fn claim(player: impl Into<PlayerId>) -> Self {
        Self::new(player, MoveKind::Claim)
    }

    /// Resign the game.
    pub fn resign(player: impl Into<PlayerId>) -> Self {
        Self::new(player, MoveKind::Resign)
    }

    /// Offer a draw.
    pub fn offer_draw(player: impl Into<PlayerId>) -> Self {
        Self::new(player, MoveKind::OfferDraw)
    }

    /// Accept a draw.
    pub fn accept_draw(player: impl Into<PlayerId>) -> Self {
        Self::new(player, MoveKind::AcceptDraw)
    }

    /// Identity of the acting player.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// What the move does.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Place(cell) => write!(f, "{} places on {}", self.player, cell),
            MoveKind::OfferPiece(piece) => write!(f, "{} offers piece {}", self.player, piece),
            MoveKind::Claim => write!(f, "{} claims victory", self.player),
            MoveKind::Resign => write!(f, "{} resigns", self.player),
            MoveKind::OfferDraw => write!(f, "{} offers a draw", self.player),
            MoveKind::AcceptDraw => write!(f, "{} accepts the draw", self.player),
        }
    }
}

/// Why a move was not applied.
///
/// [`crate::play`] swallows these and returns the game unchanged;
/// [`crate::try_play`] reports them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The actor is not the active player.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(PlayerId),

    /// A piece is already on offer.
    #[display("Piece {} is already on offer", _0)]
    OfferPending(Piece),

    /// A placement was attempted with nothing on offer.
    #[display("No piece is on offer")]
    NothingOnOffer,

    /// The target cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The offered piece is already on the board.
    #[display("Piece {} has already been played", _0)]
    PieceAlreadyPlayed(Piece),

    /// A claim was made with no winning line through recent placements.
    #[display("No winning line to claim")]
    NoWinToClaim,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
