//! Line-oriented console for a local two-player game.
//!
//! Both players share the terminal; every command is issued on behalf of
//! whoever is active.

use crate::record::TableRecord;
use crate::store::GameStore;
use crate::table::TableService;
use derive_more::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_quarto::{Cell, Game, Move, ParseError, Piece};
use tracing::{debug, instrument};

/// A console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `offer <piece>`
    Offer(Piece),
    /// `place <cell>`
    Place(Cell),
    /// `claim`
    Claim,
    /// `resign`
    Resign,
    /// `draw`
    Draw,
    /// `accept`
    Accept,
    /// `board`
    Board,
    /// `exit`
    Exit,
}

/// Failure to read a console command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,
    /// The verb is not a known command.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),
    /// The command needs an argument.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(&'static str),
    /// The argument did not parse.
    #[display("{}", _0)]
    Parse(ParseError),
}

impl std::error::Error for CommandError {}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let argument = words.next();
        match verb.as_str() {
            "offer" => {
                let text = argument.ok_or(CommandError::MissingArgument("offer"))?;
                Ok(Self::Offer(text.parse()?))
            }
            "place" => {
                let text = argument.ok_or(CommandError::MissingArgument("place"))?;
                Ok(Self::Place(text.to_lowercase().parse()?))
            }
            "claim" => Ok(Self::Claim),
            "resign" => Ok(Self::Resign),
            "draw" => Ok(Self::Draw),
            "accept" => Ok(Self::Accept),
            "board" => Ok(Self::Board),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

impl ConsoleCommand {
    /// The engine move this command makes for `player`, if any.
    pub fn to_move(self, player: &str) -> Option<Move> {
        match self {
            Self::Offer(piece) => Some(Move::offer_piece(player, piece)),
            Self::Place(cell) => Some(Move::place(player, cell)),
            Self::Claim => Some(Move::claim(player)),
            Self::Resign => Some(Move::resign(player)),
            Self::Draw => Some(Move::offer_draw(player)),
            Self::Accept => Some(Move::accept_draw(player)),
            Self::Board | Self::Exit => None,
        }
    }
}

/// Describes the game: board, turn and outcome.
pub fn describe(game: &Game) -> String {
    let mut text = game.board().display();
    text.push('\n');

    if game.game_over() {
        match game.winning_player() {
            Some(seat) => {
                text.push_str(&format!("{} wins", game.player(seat)));
                if let Some(line) = game.winning_line() {
                    text.push_str(&format!(
                        " with {} {} ({})",
                        line.win_type(),
                        line.win_index(),
                        line.attribute()
                    ));
                }
                text.push('\n');
            }
            None => text.push_str("Game drawn\n"),
        }
        return text;
    }

    let active = game.active_player_id();
    match game.piece_on_offer() {
        Some(piece) => text.push_str(&format!(
            "{}: place piece {} ({})\n",
            active,
            piece,
            piece.describe()
        )),
        None => {
            let remaining = game
                .board()
                .remaining_pieces()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            text.push_str(&format!("{}: offer a piece [{}]\n", active, remaining));
        }
    }
    if game.draw_being_offered() {
        text.push_str("A draw is on offer\n");
    }
    text
}

/// Console bound to one table.
#[derive(Debug)]
pub struct Console<S> {
    service: TableService<S>,
    id: String,
}

impl<S: GameStore> Console<S> {
    /// Creates a console for the accepted game `id`.
    pub fn new(service: TableService<S>, id: impl Into<String>) -> Self {
        Self {
            service,
            id: id.into(),
        }
    }

    /// Runs one command, returning the text to show.
    ///
    /// `None` means the session should end.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn execute(&self, line: &str) -> Option<String> {
        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => return Some(String::new()),
            Err(err) => return Some(format!("{}\n", err)),
        };
        debug!(?command, "Command parsed");

        let record = match self.service.status(&self.id) {
            Ok(record) => record,
            Err(err) => return Some(format!("{}\n", err)),
        };
        let Some(game) = record.game() else {
            return Some(format!("Challenge {} has not been accepted\n", self.id));
        };

        match command {
            ConsoleCommand::Exit => None,
            ConsoleCommand::Board => Some(render(&record)),
            _ => {
                let Some(action) = command.to_move(game.active_player_id()) else {
                    return Some(String::new());
                };
                Some(match self.service.submit(&self.id, &action) {
                    Ok(record) => render(&record),
                    Err(err) => format!("{}\n", err),
                })
            }
        }
    }

    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> std::io::Result<()> {
        if let Ok(record) = self.service.status(&self.id) {
            write!(output, "{}", render(&record))?;
        }
        for line in input.lines() {
            match self.execute(&line?) {
                Some(text) => write!(output, "{}", text)?,
                None => break,
            }
            output.flush()?;
        }
        Ok(())
    }
}

fn render(record: &TableRecord) -> String {
    let Some(game) = record.game() else {
        return String::new();
    };
    let mut text = describe(game);
    if *record.tried_for_victory() && !game.game_over() {
        text.push_str("Victory not possible at this time\n");
    }
    text
}
