//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History starts with Player 1 and never repeats a player. While the game
/// is in progress the turn belongs to the player after the last mover; once
/// decided, it stays with the player who made the deciding move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return state.turn() == Player::One;
        };

        if first.player != Player::One {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let last = history[history.len() - 1].player;
        let expected = if state.outcome().is_terminal() {
            last
        } else {
            last.other()
        };

        state.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}
