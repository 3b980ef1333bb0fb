//! Host error types.

use derive_more::{Display, Error};
use strictly_quarto::MoveError;
use tracing::instrument;

/// Store failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    #[track_caller]
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::new(format!("Lock poisoned: {}", err))
    }
}

/// Failure of a challenge-lifecycle or move request.
#[derive(Debug, Clone, Display)]
pub enum TableError {
    /// A record already exists for the pairing.
    #[display("A game already exists for {}", _0)]
    AlreadyExists(String),

    /// No record exists under the id.
    #[display("No game found for {}", _0)]
    NotFound(String),

    /// The challenge has not been accepted yet.
    #[display("Challenge {} has not been accepted", _0)]
    NotAccepted(String),

    /// The challenge was already accepted.
    #[display("Challenge {} was already accepted", _0)]
    AlreadyAccepted(String),

    /// The game has finished.
    #[display("Game {} is over", _0)]
    GameOver(String),

    /// A claim already failed this turn.
    #[display("Victory not possible at this time")]
    AlreadyTriedForVictory(String),

    /// The engine rejected the move.
    #[display("Move rejected: {}", _0)]
    Rejected(MoveError),

    /// The store failed.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TableError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<MoveError> for TableError {
    fn from(err: MoveError) -> Self {
        Self::Rejected(err)
    }
}
