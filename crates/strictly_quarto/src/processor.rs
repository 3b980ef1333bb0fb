//! The move processor: `(Game, Move) -> Game`.
//!
//! Transitions are pure. The input game is never modified; every call
//! returns a new value. Rule violations never surface from [`play`]:
//! a rejected move yields a game equal to the input. [`try_play`] is the
//! same transition with the rejection reason reported.
//!
//! | move | effect |
//! |---|---|
//! | `OfferPiece(p)` | offer `p`, flip the active player, keep only the latest placement |
//! | `Place(cell)` | move the offered piece onto `cell`, record the placement |
//! | `Claim` | if a line through a recent placement wins, the active player wins |
//! | `Resign` | the opponent wins |
//! | `OfferDraw` | mark a draw as offered, flip the active player |
//! | `AcceptDraw` | end the game without a winner |
//!
//! Game-over is not enforced here; the orchestrator decides whether
//! moves on a finished game are allowed.

use super::action::{Move, MoveError, MoveKind};
use super::contracts::{Contract, MoveContract, PieceIsOffered, WinIsPresent};
use super::game::{Game, PLACEMENT_HISTORY_CAP};
use tracing::{debug, info, instrument, warn};

/// Applies a move, reporting why it was rejected.
///
/// # Errors
///
/// Returns a [`MoveError`] naming the broken rule; the input game is
/// untouched either way.
#[instrument(skip(game, action), fields(active = %game.active_player_id(), action = %action))]
pub fn try_play(game: &Game, action: &Move) -> Result<Game, MoveError> {
    MoveContract::pre(game, action)?;

    let mut next = game.clone();
    match action.kind() {
        MoveKind::OfferPiece(piece) => {
            next.piece_on_offer = Some(piece);
            next.active_player = game.active_player.opponent();
            next.placement_history.truncate(1);
        }
        MoveKind::Place(cell) => {
            let piece = PieceIsOffered::check(game)?;
            next.board.place(cell, piece);
            next.piece_on_offer = None;
            next.placement_history.insert(0, Some(cell));
            next.placement_history.truncate(PLACEMENT_HISTORY_CAP);
        }
        MoveKind::Claim => {
            let line = WinIsPresent::check(game)?;
            info!(
                winner = %game.active_player_id(),
                win_type = %line.win_type(),
                win_index = line.win_index(),
                "Claim accepted"
            );
            next.game_over = true;
            next.winning_player = Some(game.active_player);
            next.winning_line = Some(line);
        }
        MoveKind::Resign => {
            next.game_over = true;
            next.winning_player = Some(game.active_player.opponent());
        }
        MoveKind::OfferDraw => {
            next.draw_being_offered = true;
            next.active_player = game.active_player.opponent();
        }
        MoveKind::AcceptDraw => {
            next.game_over = true;
        }
    }

    #[cfg(debug_assertions)]
    MoveContract::post(game, &next)?;

    debug!(active = %next.active_player_id(), game_over = next.game_over, "Move applied");
    Ok(next)
}

/// Applies a move.
///
/// A rejected move returns a copy equal to `game`; compare the result
/// with the input, or use [`try_play`], to tell the two apart.
#[instrument(skip(game, action))]
pub fn play(game: &Game, action: &Move) -> Game {
    try_play(game, action).unwrap_or_else(|error| {
        warn!(%error, %action, "Move rejected");
        game.clone()
    })
}

impl Game {
    /// Applies a move; see [`play`].
    pub fn play(&self, action: &Move) -> Game {
        play(self, action)
    }

    /// Applies a move, reporting rejections; see [`try_play`].
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] for the broken rule.
    pub fn try_play(&self, action: &Move) -> Result<Game, MoveError> {
        try_play(self, action)
    }
}
