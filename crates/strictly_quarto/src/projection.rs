//! The view of a game handed to an image renderer.
//!
//! The renderer addresses images by a path key of four `;`-separated
//! fields:
//!
//! ```text
//! <16 comma-separated slots, empty for none>;<piece on offer>;<last placement>;<winning fields>
//! ```
//!
//! e.g. `5,,,,,,,,,,,,,,,;9;0;` for piece 5 on a1 with piece 9 on offer.

use super::board::Board;
use super::cell::BOARD_SIZE;
use super::error::ParseError;
use super::game::Game;
use super::piece::Piece;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a renderer needs to draw a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderView {
    /// Board slots.
    pub board: Board,
    /// Piece awaiting placement.
    pub piece_on_offer: Option<Piece>,
    /// Index of the most recent placement.
    pub last_placement: Option<usize>,
    /// Indices of the winning line, in line order.
    pub winning_fields: Option<[usize; 4]>,
}

impl Game {
    /// Projects the game onto what a renderer draws.
    pub fn render_view(&self) -> RenderView {
        RenderView {
            board: self.board().clone(),
            piece_on_offer: self.piece_on_offer(),
            last_placement: self.last_placement().map(|cell| cell.index()),
            winning_fields: self.winning_fields(),
        }
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_index(text: &str) -> Result<usize, ParseError> {
    text.parse::<usize>()
        .ok()
        .filter(|index| *index < BOARD_SIZE)
        .ok_or_else(|| ParseError::InvalidRenderKey(format!("'{}' is not a board index", text)))
}

impl RenderView {
    /// Encodes the view as a renderer path key.
    pub fn to_key(&self) -> String {
        let slots = self
            .board
            .slots()
            .iter()
            .map(|slot| optional(*slot))
            .collect::<Vec<_>>()
            .join(",");
        let winning = self
            .winning_fields
            .map(|fields| fields.map(|i| i.to_string()).join(","))
            .unwrap_or_default();
        format!(
            "{};{};{};{}",
            slots,
            optional(self.piece_on_offer),
            optional(self.last_placement),
            winning
        )
    }

    /// Decodes a renderer path key.
    ///
    /// # Errors
    ///
    /// - [`ParseError::BoardLength`] if the board field has other than 16 slots
    /// - [`ParseError::InvalidPiece`] for a bad slot or offered piece
    /// - [`ParseError::DuplicatePiece`] if a piece repeats
    /// - [`ParseError::InvalidRenderKey`] for any other malformed field
    #[instrument]
    pub fn from_key(key: &str) -> Result<Self, ParseError> {
        let [slots, offer, last, winning] = key.split(';').collect::<Vec<_>>()[..] else {
            return Err(ParseError::InvalidRenderKey(format!(
                "expected 4 ';'-separated fields in '{}'",
                key
            )));
        };

        let slots = slots
            .split(',')
            .map(|slot| {
                if slot.is_empty() {
                    Ok(None)
                } else {
                    slot.parse::<Piece>().map(Some)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::from_slots(&slots)?;

        let piece_on_offer = match offer {
            "" => None,
            text => Some(text.parse::<Piece>()?),
        };
        let last_placement = match last {
            "" => None,
            text => Some(parse_index(text)?),
        };
        let winning_fields = match winning {
            "" => None,
            text => {
                let indices = text
                    .split(',')
                    .map(parse_index)
                    .collect::<Result<Vec<_>, _>>()?;
                let fields: [usize; 4] = indices.try_into().map_err(|indices: Vec<usize>| {
                    ParseError::InvalidRenderKey(format!(
                        "winning line needs 4 cells, got {}",
                        indices.len()
                    ))
                })?;
                Some(fields)
            }
        };

        Ok(Self {
            board,
            piece_on_offer,
            last_placement,
            winning_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Ruleset, new_game, play};

    #[test]
    fn test_fresh_game_key() {
        let game = new_game("ann", "bo", Ruleset::Basic);
        assert_eq!(game.render_view().to_key(), ",,,,,,,,,,,,,,,;;;");
    }

    #[test]
    fn test_view_tracks_offer_and_placement() {
        let game = new_game("ann", "bo", Ruleset::Basic);
        let game = play(&game, &Move::offer_piece("ann", "5".parse().unwrap()));
        let game = play(&game, &Move::place("bo", "a1".parse().unwrap()));
        let game = play(&game, &Move::offer_piece("bo", "9".parse().unwrap()));

        let view = game.render_view();
        assert_eq!(view.piece_on_offer, Piece::new(9));
        assert_eq!(view.last_placement, Some(0));
        assert_eq!(view.winning_fields, None);
        assert_eq!(view.to_key(), "5,,,,,,,,,,,,,,,;9;0;");
    }

    #[test]
    fn test_from_key_reads_winning_fields() {
        let view = RenderView::from_key("0,2,4,6,,,,,,,,,,,,;;3;0,1,2,3").unwrap();
        assert_eq!(view.board.occupied_count(), 4);
        assert_eq!(view.last_placement, Some(3));
        assert_eq!(view.winning_fields, Some([0, 1, 2, 3]));
        assert_eq!(view.to_key(), "0,2,4,6,,,,,,,,,,,,;;3;0,1,2,3");
    }

    #[test]
    fn test_from_key_rejects_short_board() {
        assert_eq!(
            RenderView::from_key("1,2,3;;;"),
            Err(ParseError::BoardLength(3))
        );
    }

    #[test]
    fn test_from_key_rejects_bad_fields() {
        assert!(matches!(
            RenderView::from_key(",,,,,,,,,,,,,,,;;"),
            Err(ParseError::InvalidRenderKey(_))
        ));
        assert!(matches!(
            RenderView::from_key(",,,,,,,,,,,,,,,;17;;"),
            Err(ParseError::InvalidPiece(_))
        ));
        assert!(matches!(
            RenderView::from_key(",,,,,,,,,,,,,,,;;16;"),
            Err(ParseError::InvalidRenderKey(_))
        ));
        assert!(matches!(
            RenderView::from_key(",,,,,,,,,,,,,,,;;;0,1"),
            Err(ParseError::InvalidRenderKey(_))
        ));
    }
}
