//! Strictly Quarto - pure Quarto game logic.
//!
//! Quarto is played on a 4x4 board with 16 distinct pieces, each encoded
//! as four binary attributes. Players take turns offering a piece to the
//! opponent, who must place it. A line of four pieces sharing any one
//! attribute wins, but only once claimed.
//!
//! # Architecture
//!
//! - **Pieces and cells**: bit-level piece attributes and `[a-d][1-4]`
//!   coordinates
//! - **Rules**: line geometry and incremental win detection
//! - **Processor**: the pure transition `(Game, Move) -> Game`
//! - **Factory**: fresh games from two player identities and a ruleset
//!
//! The engine does no I/O and holds no locks. Callers persisting games
//! must serialize the load, apply, store round trip per game themselves.
//!
//! # Example
//!
//! ```
//! use strictly_quarto::{Move, Ruleset, new_game, play};
//!
//! let game = new_game("ann", "bo", Ruleset::Basic);
//! let game = play(&game, &Move::offer_piece("ann", "5".parse().unwrap()));
//! let game = play(&game, &Move::place("bo", "a1".parse().unwrap()));
//! assert_eq!(game.board().get(0).map(|p| p.code()), Some(5));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod contracts;
mod error;
mod factory;
mod game;
mod invariants;
mod piece;
mod processor;
mod projection;
mod rules;

pub use action::{Move, MoveError, MoveKind};
pub use board::Board;
pub use cell::{BOARD_SIZE, Cell, SIDE, format_index, parse_cell};
pub use contracts::{
    CellIsEmpty, Contract, MoveContract, NoOfferPending, PieceIsAvailable, PieceIsOffered,
    PlayersTurn, WinIsPresent,
};
pub use error::ParseError;
pub use factory::new_game;
pub use game::{Game, PLACEMENT_HISTORY_CAP, PlayerId, Ruleset, Seat};
pub use invariants::{
    DistinctPiecesInvariant, HistoryBoundedInvariant, Invariant, InvariantSet,
    InvariantViolation, OfferConsistentInvariant, OutcomeConsistentInvariant, QuartoInvariants,
};
pub use piece::{Attribute, PIECE_COUNT, Piece, shares_attribute};
pub use processor::{play, try_play};
pub use projection::RenderView;
pub use rules::{
    Line, LineKind, WinningLine, all_lines, check_lines_through, common_attribute,
    find_winning_line, has_winning_position, is_winning_line, lines_through,
};
