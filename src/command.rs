//! Session commands understood by the headless harness.

use derive_more::Display;
use noughts_engine::{EngineError, Marker, Player, Position};
use std::str::FromStr;
use tracing::instrument;

/// One user intent, parsed from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place the current player's marker at a board index.
    Move(usize),
    /// Give a marker to a player (the other player gets the complement).
    Marker {
        /// Player choosing.
        player: Player,
        /// Marker chosen.
        marker: Marker,
    },
    /// Clear the board and start over.
    Reset,
    /// Print the board and status.
    Show,
    /// Print the JSON snapshot.
    State,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Text printed for `help`.
pub const HELP: &str = "\
Commands:
  move <0-8|label>     place the current player's marker (bare <0-8> also works)
  marker <1|2> <X|O>   choose a marker; the other player gets the other one
  reset                start a new game (markers are kept)
  show                 print the board
  state                print the game state as JSON
  help                 print this list
  quit                 leave";

/// A line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command {:?} (try 'help')", _0)]
    Unknown(String),

    /// A required argument is missing.
    #[display("'{}' needs {}", _0, _1)]
    MissingArgument(&'static str, &'static str),

    /// Cell is neither a number nor a position label.
    #[display("Not a cell: {:?}", _0)]
    BadCell(String),

    /// Player is not 1 or 2.
    #[display("Not a player: {:?} (expected 1 or 2)", _0)]
    BadPlayer(String),

    /// Marker text rejected by the engine.
    #[display("{}", _0)]
    Marker(EngineError),
}

impl std::error::Error for CommandError {}

impl From<EngineError> for CommandError {
    fn from(err: EngineError) -> Self {
        CommandError::Marker(err)
    }
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_lowercase().as_str() {
            "move" | "m" => {
                let cell = words
                    .next()
                    .ok_or(CommandError::MissingArgument("move", "a cell"))?;
                parse_cell(cell).map(SessionCommand::Move)
            }
            "marker" => {
                let player = words
                    .next()
                    .ok_or(CommandError::MissingArgument("marker", "a player"))?;
                let marker = words
                    .next()
                    .ok_or(CommandError::MissingArgument("marker", "a marker"))?;
                let player = Player::from_number(player)
                    .ok_or_else(|| CommandError::BadPlayer(player.to_string()))?;
                Ok(SessionCommand::Marker {
                    player,
                    marker: Marker::parse(marker)?,
                })
            }
            "reset" | "r" => Ok(SessionCommand::Reset),
            "show" | "s" => Ok(SessionCommand::Show),
            "state" => Ok(SessionCommand::State),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
            _ if head.chars().all(|c| c.is_ascii_digit()) => {
                parse_cell(head).map(SessionCommand::Move)
            }
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

/// Parses a raw index or a position label.
///
/// Numbers are passed through unchecked so the engine can reject
/// out-of-range indices itself.
fn parse_cell(cell: &str) -> Result<usize, CommandError> {
    if let Ok(index) = cell.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(cell)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::BadCell(cell.to_string()))
}
