//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. An accepted move is recorded
//! with the marker it wrote, since markers can be reassigned mid-game.

use super::{Marker, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move: a player placing their marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The marker written to the board.
    pub marker: Marker,
    /// The position where the marker was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, marker: Marker, position: Position) -> Self {
        Self {
            player,
            marker,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.marker, self.position)
    }
}

/// Why an intent left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// The targeted square already holds a marker.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has been decided; only reset is accepted.
    #[display("Game is already over")]
    GameOver,
}

/// Result of an intent that was well-formed.
///
/// Rejected intents are not errors: they leave the state untouched and
/// report the reason as [`Effect::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// The state changed.
    Applied,
    /// Nothing changed.
    Ignored(Ignored),
}

impl Effect {
    /// Returns true if the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Effect::Applied)
    }
}

/// Caller contract violations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {} out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// Marker text other than X or O.
    #[display("Unknown marker {:?} (expected X or O)", _0)]
    UnknownMarker(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
