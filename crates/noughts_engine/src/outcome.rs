//! Game outcome, derived from the board.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Never stored alongside the board; see [`crate::rules::evaluate_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    InProgress,
    /// A winning triple holds this marker.
    Win(Marker),
    /// Board full with no winning triple.
    Tie,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(marker) => write!(f, "{} wins!", marker),
            Outcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
