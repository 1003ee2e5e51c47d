//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must only ever fill
/// empty squares and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.marker));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Marker, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_marker_swap_mid_game_holds() {
        let mut engine = GameEngine::new();
        engine.submit_move(0).unwrap();
        engine.set_marker(Player::One, Marker::O);
        engine.submit_move(1).unwrap();
        assert!(MonotonicBoardInvariant::holds(engine.state()));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::new();
        engine.submit_move(4).unwrap();
        let mut state = engine.state().clone();
        state
            .board_mut()
            .set(Position::Center, Square::Occupied(Marker::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
