//! Distinct pieces invariant: no piece appears twice on the board.

use super::super::Game;
use super::Invariant;

/// Invariant: every piece on the board is distinct.
pub struct DistinctPiecesInvariant;

impl Invariant<Game> for DistinctPiecesInvariant {
    fn holds(game: &Game) -> bool {
        game.board().is_well_formed()
    }

    fn description() -> &'static str {
        "Every piece appears on the board at most once"
    }
}
