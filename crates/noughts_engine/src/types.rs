//! Core domain types for tic-tac-toe.

use super::action::EngineError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player places on the board.
///
/// Exactly two markers exist. Whichever one Player 1 holds, Player 2 holds
/// the [`complement`](Marker::complement).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn complement(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Parses a marker from user text ("x", "O", ...).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMarker`] for anything but X or O.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        text.trim()
            .parse()
            .map_err(|_| EngineError::UnknownMarker(text.to_string()))
    }
}

/// One of the two seats at the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Moves first after every reset.
    #[display("Player 1")]
    One,
    /// Moves second.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Parses a seat number ("1" or "2").
    pub fn from_number(number: &str) -> Option<Self> {
        match number.trim() {
            "1" => Some(Player::One),
            "2" => Some(Player::Two),
            _ => None,
        }
    }
}

/// Which marker each player holds.
///
/// Only Player 1's marker is stored; Player 2 always holds its complement,
/// so the two can never coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerAssignment {
    player1: Marker,
}

impl MarkerAssignment {
    /// Creates an assignment giving `player1` to Player 1.
    pub fn new(player1: Marker) -> Self {
        Self { player1 }
    }

    /// Returns the marker held by `player`.
    pub fn marker_for(&self, player: Player) -> Marker {
        match player {
            Player::One => self.player1,
            Player::Two => self.player1.complement(),
        }
    }

    /// Assigns `marker` to `player` and the complement to the other player.
    pub fn assign(&mut self, player: Player, marker: Marker) {
        self.player1 = match player {
            Player::One => marker,
            Player::Two => marker.complement(),
        };
    }
}

impl Default for MarkerAssignment {
    fn default() -> Self {
        Self::new(Marker::X)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a 3x3 grid: `.` for empty, `X` or `O` otherwise.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(marker) => write!(f, "{marker}")?,
                }
            }
        }
        Ok(())
    }
}
