//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and checked after every accepted move in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod frozen_outcome;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use frozen_outcome::FrozenOutcomeInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    FrozenOutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, GameState, Marker, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2] {
            engine.submit_move(index).unwrap();
        }
        assert!(TicTacToeInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = GameEngine::new();
        engine.submit_move(4).unwrap();
        let mut state = engine.state().clone();
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Marker::O));

        let violations = TicTacToeInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MonotonicBoardInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
