//! The game state aggregate and its read-only snapshot.

use super::action::Move;
use super::rules;
use super::{Board, Marker, MarkerAssignment, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete game state.
///
/// The outcome is not a field: [`GameState::outcome`] recomputes it from the
/// board every time, so the two cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    markers: MarkerAssignment,
    history: Vec<Move>,
}

impl GameState {
    /// Creates an empty game with Player 1 to move.
    #[instrument]
    pub fn new(markers: MarkerAssignment) -> Self {
        Self {
            board: Board::new(),
            turn: Player::One,
            markers,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next (frozen once the game is decided).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the marker assignment.
    pub fn markers(&self) -> MarkerAssignment {
        self.markers
    }

    /// Returns the marker held by `player`.
    pub fn marker_for(&self, player: Player) -> Marker {
        self.markers.marker_for(player)
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the outcome from the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate_outcome(&self.board)
    }

    /// Human-readable status line.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!(
                "Next player: {} ({})",
                self.turn,
                self.marker_for(self.turn)
            ),
            terminal => terminal.to_string(),
        }
    }

    /// Writes the current player's marker at `pos` (unchecked - use
    /// `GameEngine::submit_move` for validation). Returns the recorded move.
    pub(crate) fn apply_move(&mut self, pos: Position) -> Move {
        let action = Move::new(self.turn, self.marker_for(self.turn), pos);
        self.board.set(pos, Square::Occupied(action.marker));
        self.history.push(action);
        if !self.outcome().is_terminal() {
            self.turn = self.turn.other();
        }
        action
    }

    /// Assigns `marker` to `player` and the complement to the opponent.
    pub(crate) fn assign_marker(&mut self, player: Player, marker: Marker) {
        self.markers.assign(player, marker);
    }

    /// Clears board, turn and history; keeps the marker assignment.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.markers);
    }

    /// Mutable board access for invariant tests.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Takes an owned, serialisable view of the state.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        let mut board = [None; 9];
        for (cell, square) in board.iter_mut().zip(self.board.squares()) {
            *cell = square.marker();
        }
        Snapshot {
            board,
            turn: self.turn,
            player1_marker: self.marker_for(Player::One),
            player2_marker: self.marker_for(Player::Two),
            outcome: self.outcome(),
            winning_line: rules::winning_line(&self.board),
            status: self.status(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(MarkerAssignment::default())
    }
}

/// Read-only view handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order; `None` for empty.
    pub board: [Option<Marker>; 9],
    /// Player to move.
    pub turn: Player,
    /// Marker held by Player 1.
    pub player1_marker: Marker,
    /// Marker held by Player 2.
    pub player2_marker: Marker,
    /// Outcome derived from the board.
    pub outcome: Outcome,
    /// Line to highlight when the game is won.
    pub winning_line: Option<[Position; 3]>,
    /// Status banner text.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.turn(), Player::One);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.status(), "Next player: Player 1 (X)");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut state = GameState::default();
        let action = state.apply_move(Position::Center);
        assert_eq!(action.marker, Marker::X);
        assert_eq!(state.turn(), Player::Two);
        assert_eq!(state.status(), "Next player: Player 2 (O)");
    }

    #[test]
    fn test_clear_keeps_markers() {
        let mut state = GameState::new(MarkerAssignment::new(Marker::O));
        state.apply_move(Position::TopLeft);
        state.clear();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.turn(), Player::One);
        assert_eq!(state.marker_for(Player::One), Marker::O);
    }

    #[test]
    fn test_snapshot_serialises() {
        let mut state = GameState::default();
        state.apply_move(Position::Center);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["board"][4], "X");
        assert_eq!(json["board"][0], serde_json::Value::Null);
        assert_eq!(json["turn"], "Two");
        assert_eq!(json["outcome"], "InProgress");
    }
}
