//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{EngineError, Ignored};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// A failed precondition means the intent is ignored; a failed
/// postcondition means the engine itself is broken.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Ignored>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The targeted square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects positions that already hold a marker.
    #[instrument(skip(state))]
    pub fn check(pos: &Position, state: &GameState) -> Result<(), Ignored> {
        if state.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(Ignored::CellOccupied(*pos))
        }
    }
}

/// Precondition: The game must not be decided yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects any intent once the outcome is terminal.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Ignored> {
        if state.outcome().is_terminal() {
            Err(Ignored::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the square is empty, then the game is undecided.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(state))]
    pub fn check(pos: &Position, state: &GameState) -> Result<(), Ignored> {
        SquareIsEmpty::check(pos, state)?;
        GameUndecided::check(state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Square must be empty
/// - Game must be undecided
///
/// Postconditions:
/// - Exactly one more move is recorded
/// - Board remains monotonic
/// - Players still alternate
/// - Nothing was played after a decision
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), Ignored> {
        LegalMove::check(pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(EngineError::InvariantViolation(
                "Postcondition failed: move was not recorded".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
