//! Contract-based validation for Quarto moves.
//!
//! Preconditions are checked before a move is applied; postconditions
//! (the invariant set) after it.

use super::action::{Move, MoveError, MoveKind};
use super::cell::Cell;
use super::game::Game;
use super::invariants::{InvariantSet, QuartoInvariants};
use super::piece::Piece;
use super::rules::{WinningLine, has_winning_position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the actor must be the active player.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the actor against the active seat.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &Game) -> Result<(), MoveError> {
        if action.player() != game.active_player_id() {
            Err(MoveError::WrongPlayer(action.player().to_string()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: no piece may already be on offer.
pub struct NoOfferPending;

impl NoOfferPending {
    /// Fails if a piece is awaiting placement.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match game.piece_on_offer() {
            Some(piece) => Err(MoveError::OfferPending(piece)),
            None => Ok(()),
        }
    }
}

/// Precondition: a piece must be on offer.
pub struct PieceIsOffered;

impl PieceIsOffered {
    /// Returns the offered piece.
    pub fn check(game: &Game) -> Result<Piece, MoveError> {
        game.piece_on_offer().ok_or(MoveError::NothingOnOffer)
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails if the cell holds a piece.
    pub fn check(cell: Cell, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

/// Precondition: the offered piece must not be on the board.
pub struct PieceIsAvailable;

impl PieceIsAvailable {
    /// Fails if the piece was already placed.
    pub fn check(piece: Piece, game: &Game) -> Result<(), MoveError> {
        if game.board().contains(piece) {
            Err(MoveError::PieceAlreadyPlayed(piece))
        } else {
            Ok(())
        }
    }
}

/// Precondition for a claim: a line through a recent placement wins.
pub struct WinIsPresent;

impl WinIsPresent {
    /// Returns the winning line the claim rests on.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<WinningLine, MoveError> {
        has_winning_position(game).ok_or(MoveError::NoWinToClaim)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for Quarto moves.
///
/// Preconditions:
/// - Actor is the active player
/// - Offers need an empty hand and an unplayed piece
/// - Placements need a piece on offer and an empty cell
///
/// The claim's win check is [`WinIsPresent`], run by the processor so
/// the winning line is computed once.
///
/// Postconditions: every invariant in [`QuartoInvariants`].
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        PlayersTurn::check(action, game)?;
        match action.kind() {
            MoveKind::OfferPiece(piece) => {
                NoOfferPending::check(game)?;
                PieceIsAvailable::check(piece, game)
            }
            MoveKind::Place(cell) => {
                PieceIsOffered::check(game)?;
                CellIsEmpty::check(cell, game)
            }
            MoveKind::Claim | MoveKind::Resign | MoveKind::OfferDraw | MoveKind::AcceptDraw => {
                Ok(())
            }
        }
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        QuartoInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
