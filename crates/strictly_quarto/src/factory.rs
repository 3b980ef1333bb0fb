//! Construction of fresh games.

use super::board::Board;
use super::game::{Game, PlayerId, Ruleset, Seat};
use tracing::{info, instrument};

/// Creates a game between two players.
///
/// The board starts empty, the first player acts first, and the
/// placement history holds a single empty entry.
#[instrument(skip(player1, player2))]
pub fn new_game(
    player1: impl Into<PlayerId>,
    player2: impl Into<PlayerId>,
    ruleset: Ruleset,
) -> Game {
    let (first, second): (PlayerId, PlayerId) = (player1.into(), player2.into());
    info!(%first, %second, %ruleset, "Creating new game");
    let players = [first, second];
    Game {
        board: Board::new(),
        players,
        active_player: Seat::First,
        piece_on_offer: None,
        placement_history: vec![None],
        ruleset,
        draw_being_offered: false,
        game_over: false,
        winning_player: None,
        winning_line: None,
    }
}
