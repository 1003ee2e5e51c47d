//! The game engine: the only owner of a [`GameState`].

use super::action::{EngineError, Effect};
use super::contracts::{Contract, GameUndecided, MoveContract};
use super::{GameState, Marker, MarkerAssignment, Player, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Every operation is synchronous and applies atomically to the owned state.
/// Presentation layers read through [`GameEngine::state`] or
/// [`GameEngine::snapshot`] and never mutate the state directly.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game with the default markers (Player 1 = X).
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given marker assignment.
    #[instrument]
    pub fn with_markers(markers: MarkerAssignment) -> Self {
        Self {
            state: GameState::new(markers),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned view of the current game state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Returns the empty positions, or nothing once the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.outcome().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.state.board())
        }
    }

    /// Places the current player's marker at board index `index` (0-8).
    ///
    /// Occupied squares and decided games leave the state untouched and
    /// return [`Effect::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `index` is not 0-8.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn submit_move(&mut self, index: usize) -> Result<Effect, EngineError> {
        let pos = Position::from_index(index).ok_or(EngineError::CellOutOfRange(index))?;
        self.place(pos)
    }

    /// Places the current player's marker at `pos`.
    ///
    /// # Errors
    ///
    /// Only in debug builds, if the move postcondition fails.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn place(&mut self, pos: Position) -> Result<Effect, EngineError> {
        if let Err(reason) = MoveContract::pre(&self.state, &pos) {
            debug!(%reason, "Move ignored");
            return Ok(Effect::Ignored(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let action = self.state.apply_move(pos);
        debug!(%action, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.state)?;

        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.state.history().len(), "Game decided");
        }

        Ok(Effect::Applied)
    }

    /// Gives `marker` to `player` and the other marker to the opponent.
    ///
    /// Ignored once the game is decided. Squares already on the board keep
    /// the marker they were written with.
    #[instrument(skip(self))]
    pub fn set_marker(&mut self, player: Player, marker: Marker) -> Effect {
        if let Err(reason) = GameUndecided::check(&self.state) {
            debug!(%reason, "Marker change ignored");
            return Effect::Ignored(reason);
        }

        self.state.assign_marker(player, marker);
        debug!(
            player1 = %self.state.marker_for(Player::One),
            player2 = %self.state.marker_for(Player::Two),
            "Markers assigned"
        );
        Effect::Applied
    }

    /// Starts a new game: empty board, Player 1 to move, markers kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.clear();
        info!(player1 = %self.state.marker_for(Player::One), "Game reset");
    }
}
