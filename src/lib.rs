//! Noughts library - headless tic-tac-toe harness
//!
//! Wraps the pure engine from `noughts_engine` with the pieces a terminal
//! front end needs.
//!
//! # Architecture
//!
//! - **Engine**: re-exported game types ([`GameEngine`], [`GameState`], ...)
//! - **Command**: text commands parsed into [`SessionCommand`]
//! - **Session**: drives one engine from commands, interactively or scripted
//! - **Config**: TOML defaults for markers and logging
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(GameEngine::new(), Vec::new());
//! session.run_script(&["0".to_string(), "4".to_string()])?;
//! assert_eq!(session.engine().state().history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Session commands
pub use command::{CommandError, HELP, SessionCommand};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, HarnessConfig, LoggingConfig};

// Crate-level exports - Session driver
pub use session::{Flow, Session, render};

// Crate-level exports - Game types
pub use noughts_engine::{
    Board, Effect, EngineError, GameEngine, GameState, Ignored, Marker, MarkerAssignment, Move,
    Outcome, Player, Position, Snapshot, Square, contracts, invariants, rules,
};
