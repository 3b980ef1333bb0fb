//! History invariant: recent placements are few and point at pieces.

use super::super::{Game, PLACEMENT_HISTORY_CAP};
use super::Invariant;

/// Invariant: the placement history is non-empty, capped, and every
/// recorded cell holds a piece.
pub struct HistoryBoundedInvariant;

impl Invariant<Game> for HistoryBoundedInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.placement_history();
        !history.is_empty()
            && history.len() <= PLACEMENT_HISTORY_CAP
            && history
                .iter()
                .flatten()
                .all(|cell| !game.board().is_empty(*cell))
    }

    fn description() -> &'static str {
        "Placement history is bounded and points at occupied cells"
    }
}
