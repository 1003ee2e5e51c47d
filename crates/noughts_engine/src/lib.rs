//! Pure tic-tac-toe game logic with player-configurable markers.
//!
//! # Architecture
//!
//! - **Types**: board, squares, markers and players
//! - **Rules**: pure outcome evaluation over a board snapshot
//! - **Contracts**: move preconditions and debug-build postconditions
//! - **Invariants**: properties re-checked after every accepted move
//! - **Engine**: [`GameEngine`], the single owner of the [`GameState`]
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Effect, GameEngine, Marker, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     assert_eq!(engine.submit_move(index).unwrap(), Effect::Applied);
//! }
//! assert_eq!(engine.state().outcome(), Outcome::Win(Marker::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod outcome;
mod position;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{EngineError, Effect, Ignored, Move};
pub use engine::GameEngine;
pub use outcome::Outcome;
pub use position::Position;
pub use state::{GameState, Snapshot};
pub use types::{Board, Marker, MarkerAssignment, Player, Square};
