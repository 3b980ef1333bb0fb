//! First-class invariants for Quarto.
//!
//! Invariants are logical properties every game produced by the engine
//! satisfies. They are checked after each accepted transition in debug
//! builds and can be tested independently.

pub mod distinct_pieces;
pub mod history_bounded;
pub mod offer_consistent;
pub mod outcome_consistent;

pub use distinct_pieces::DistinctPiecesInvariant;
pub use history_bounded::HistoryBoundedInvariant;
pub use offer_consistent::OfferConsistentInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Err` with every violation if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$name::holds(state) {
                        violations.push(InvariantViolation::new($name::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All Quarto invariants as a composable set.
pub type QuartoInvariants = (
    DistinctPiecesInvariant,
    OfferConsistentInvariant,
    HistoryBoundedInvariant,
    OutcomeConsistentInvariant,
);
