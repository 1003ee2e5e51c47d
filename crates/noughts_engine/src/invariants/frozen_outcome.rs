//! Frozen outcome invariant: nothing is played after the game is decided.

use super::super::{Board, GameState, Square, rules};
use super::Invariant;

/// Invariant: Only the last move in the history may decide the game.
///
/// Every proper prefix of the history must evaluate to an in-progress
/// board, so no move was accepted after a win or tie.
pub struct FrozenOutcomeInvariant;

impl Invariant<GameState> for FrozenOutcomeInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();

        for mov in state.history() {
            if rules::evaluate_outcome(&replayed).is_terminal() {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.marker));
        }

        true
    }

    fn description() -> &'static str {
        "No move is accepted after the game is decided"
    }
}
