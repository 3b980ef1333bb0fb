//! Stored table records: a challenge and, once accepted, its game.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_quarto::{Game, PlayerId, Ruleset};

/// Identifier of a stored table.
pub type GameId = String;

/// Derives the table id for a pairing.
///
/// The two identities are sorted and concatenated, so either player
/// challenging the other lands on the same record.
pub fn game_id(a: &str, b: &str) -> GameId {
    let mut parts = [a, b];
    parts.sort_unstable();
    parts.concat()
}

/// A challenge between two players and the game it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct TableRecord {
    /// Challenger, then opponent.
    players: [PlayerId; 2],
    /// Where the challenge was issued.
    channel: String,
    /// Rules the game will be played under.
    #[new(default)]
    ruleset: Ruleset,
    /// Whether the opponent accepted.
    #[new(default)]
    accepted: bool,
    /// The game, present once accepted.
    #[new(default)]
    game: Option<Game>,
    /// Set after a failed claim; cleared by the next accepted offer.
    #[new(default)]
    tried_for_victory: bool,
}

impl TableRecord {
    /// The challenger.
    pub fn challenger(&self) -> &str {
        &self.players[0]
    }

    /// The challenged player.
    pub fn opponent(&self) -> &str {
        &self.players[1]
    }

    pub(crate) fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
    }

    pub(crate) fn start(&mut self, game: Game) {
        self.accepted = true;
        self.game = Some(game);
        self.tried_for_victory = false;
    }

    pub(crate) fn update(&mut self, game: Game, tried_for_victory: bool) {
        self.game = Some(game);
        self.tried_for_victory = tried_for_victory;
    }
}
