//! Offer consistency invariant: the offered piece is still in hand.

use super::super::Game;
use super::Invariant;

/// Invariant: a piece on offer has not already been placed.
pub struct OfferConsistentInvariant;

impl Invariant<Game> for OfferConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.piece_on_offer()
            .is_none_or(|piece| !game.board().contains(piece))
    }

    fn description() -> &'static str {
        "The piece on offer is not on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Piece, Ruleset, new_game, play};

    #[test]
    fn test_offer_holds() {
        let game = new_game("ann", "bo", Ruleset::Basic);
        let game = play(&game, &Move::offer_piece("ann", Piece::new(8).unwrap()));
        assert!(OfferConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_placed_piece_on_offer_violates() {
        let mut game = new_game("ann", "bo", Ruleset::Basic);
        let piece = Piece::new(8).unwrap();
        game.board.place("c3".parse().unwrap(), piece);
        game.piece_on_offer = Some(piece);
        assert!(!OfferConsistentInvariant::holds(&game));
    }
}
