//! Aggregate game state.

use super::board::Board;
use super::cell::Cell;
use super::error::ParseError;
use super::piece::Piece;
use super::rules::{LineKind, WinningLine};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque identity of a player, supplied by the caller.
pub type PlayerId = String;

/// Placements kept for the claim check: the placement before the latest
/// offer, and the one after it.
pub const PLACEMENT_HISTORY_CAP: usize = 2;

/// Index into a game's pair of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// `players[0]`, acts first.
    First,
    /// `players[1]`.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Position in the players array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Which lines count as wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Ruleset {
    /// Rows, columns and diagonals.
    #[default]
    Basic,
    /// Basic lines plus the nine 2x2 squares.
    Advanced,
}

impl Ruleset {
    /// Whether 2x2 squares win under this ruleset.
    pub fn squares_win(self) -> bool {
        matches!(self, Ruleset::Advanced)
    }

    /// Ruleset for an advanced-rules flag.
    pub fn from_advanced(advanced: bool) -> Self {
        if advanced {
            Ruleset::Advanced
        } else {
            Ruleset::Basic
        }
    }
}

impl FromStr for Ruleset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Ruleset::Basic),
            "advanced" => Ok(Ruleset::Advanced),
            other => Err(ParseError::InvalidRuleset(other.to_string())),
        }
    }
}

/// Complete state of one game.
///
/// Values are never mutated by the engine once handed out; every
/// transition returns a fresh `Game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: [PlayerId; 2],
    pub(crate) active_player: Seat,
    pub(crate) piece_on_offer: Option<Piece>,
    /// Most recent first.
    pub(crate) placement_history: Vec<Option<Cell>>,
    pub(crate) ruleset: Ruleset,
    pub(crate) draw_being_offered: bool,
    pub(crate) game_over: bool,
    pub(crate) winning_player: Option<Seat>,
    pub(crate) winning_line: Option<WinningLine>,
}

impl Game {
    /// Current placements.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both player identities, first seat first.
    pub fn players(&self) -> &[PlayerId; 2] {
        &self.players
    }

    /// Identity sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &str {
        &self.players[seat.index()]
    }

    /// Seat whose turn it is to act.
    pub fn active_player(&self) -> Seat {
        self.active_player
    }

    /// Identity of the player whose turn it is.
    pub fn active_player_id(&self) -> &str {
        self.player(self.active_player)
    }

    /// Seat of the given identity, if it plays in this game.
    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|seat| self.player(*seat) == player)
    }

    /// Piece handed to the active player and awaiting placement.
    pub fn piece_on_offer(&self) -> Option<Piece> {
        self.piece_on_offer
    }

    /// Recent placements, most recent first.
    pub fn placement_history(&self) -> &[Option<Cell>] {
        &self.placement_history
    }

    /// The most recent placement, if any.
    pub fn last_placement(&self) -> Option<Cell> {
        self.placement_history.iter().flatten().next().copied()
    }

    /// Ruleset in force.
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Whether 2x2 squares win.
    pub fn advanced_rules(&self) -> bool {
        self.ruleset.squares_win()
    }

    /// Whether a draw proposal is pending.
    pub fn draw_being_offered(&self) -> bool {
        self.draw_being_offered
    }

    /// Whether the game has ended.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Winner's seat; `None` while playing and after a draw.
    pub fn winning_player(&self) -> Option<Seat> {
        self.winning_player
    }

    /// Whether the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.game_over && self.winning_player.is_none()
    }

    /// The line that won a successful claim.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Shape of the winning line.
    pub fn win_type(&self) -> Option<LineKind> {
        self.winning_line.map(|win| win.win_type())
    }

    /// Position of the winning line among lines of its kind.
    pub fn win_index(&self) -> Option<usize> {
        self.winning_line.map(|win| win.win_index())
    }

    /// Board indices of the winning line.
    pub fn winning_fields(&self) -> Option<[usize; 4]> {
        self.winning_line.map(|win| win.winning_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent().index(), 0);
    }

    #[test]
    fn test_ruleset_text() {
        assert_eq!("advanced".parse::<Ruleset>(), Ok(Ruleset::Advanced));
        assert_eq!(Ruleset::Basic.to_string(), "basic");
        assert!(matches!(
            "Advanced".parse::<Ruleset>(),
            Err(ParseError::InvalidRuleset(_))
        ));
        assert!(Ruleset::from_advanced(true).squares_win());
        assert!(!Ruleset::from_advanced(false).squares_win());
    }
}
