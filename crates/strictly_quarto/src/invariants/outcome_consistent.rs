//! Outcome invariant: winners and winning lines only exist once the game is over.

use super::super::Game;
use super::Invariant;

/// Invariant: `winning_player` and `winning_line` are set only when the
/// game is over, and a winning line always has a winner.
pub struct OutcomeConsistentInvariant;

impl Invariant<Game> for OutcomeConsistentInvariant {
    fn holds(game: &Game) -> bool {
        if !game.game_over() {
            return game.winning_player().is_none() && game.winning_line().is_none();
        }
        game.winning_line().is_none() || game.winning_player().is_some()
    }

    fn description() -> &'static str {
        "Winner and winning line are only set on a finished game"
    }
}
