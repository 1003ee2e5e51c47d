//! Headless session driving one [`GameEngine`] from text commands.

use crate::command::{HELP, SessionCommand};
use anyhow::{Context, Result};
use noughts_engine::{Effect, EngineError, GameEngine, GameState};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// Renders the board grid followed by the status line.
pub fn render(state: &GameState) -> String {
    format!("{}\n\n{}", state.board(), state.status())
}

/// A session owns the engine and writes every reply to `out`.
#[derive(Debug)]
pub struct Session<W: Write> {
    engine: GameEngine,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session around `engine`.
    pub fn new(engine: GameEngine, out: W) -> Self {
        Self { engine, out }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Applies one command and prints the result.
    ///
    /// Ignored intents are reported as a note, not an error.
    ///
    /// # Errors
    ///
    /// Engine contract errors (out-of-range cells) and write failures.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        let effect = match command {
            SessionCommand::Move(index) => Some(self.engine.submit_move(index)?),
            SessionCommand::Marker { player, marker } => {
                Some(self.engine.set_marker(player, marker))
            }
            SessionCommand::Reset => {
                self.engine.reset();
                Some(Effect::Applied)
            }
            SessionCommand::Show => None,
            SessionCommand::State => {
                let json = serde_json::to_string_pretty(&self.engine.snapshot())
                    .context("Failed to serialise snapshot")?;
                writeln!(self.out, "{}", json)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        };

        if let Some(Effect::Ignored(reason)) = effect {
            writeln!(self.out, "Ignored: {}", reason)?;
        }
        writeln!(self.out, "{}\n", render(self.engine.state()))?;
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Unparsable lines and engine contract errors are printed and the
    /// session carries on.
    #[instrument(skip_all)]
    pub fn run_interactive(&mut self, input: impl BufRead) -> Result<()> {
        info!("Starting interactive session");
        writeln!(self.out, "{}\n", render(self.engine.state()))?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Unparsable command");
                    writeln!(self.out, "Error: {}", e)?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.downcast_ref::<EngineError>().is_some() => {
                    warn!(error = %e, "Rejected command");
                    writeln!(self.out, "Error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Applies a scripted list of commands, failing on the first bad one.
    #[instrument(skip_all, fields(count = commands.len()))]
    pub fn run_script(&mut self, commands: &[String]) -> Result<()> {
        for (step, line) in commands.iter().enumerate() {
            let command = line
                .parse::<SessionCommand>()
                .with_context(|| format!("Step {}: cannot parse {:?}", step + 1, line))?;
            self.apply_quietly(command)
                .with_context(|| format!("Step {}: {:?} failed", step + 1, line))?;
        }
        Ok(())
    }

    /// Applies a state-changing command without printing anything.
    fn apply_quietly(&mut self, command: SessionCommand) -> Result<()> {
        let effect = match command {
            SessionCommand::Move(index) => self.engine.submit_move(index)?,
            SessionCommand::Marker { player, marker } => self.engine.set_marker(player, marker),
            SessionCommand::Reset => {
                self.engine.reset();
                Effect::Applied
            }
            SessionCommand::Show
            | SessionCommand::State
            | SessionCommand::Help
            | SessionCommand::Quit => Effect::Applied,
        };
        if let Effect::Ignored(reason) = effect {
            debug!(%reason, "Scripted command ignored");
        }
        Ok(())
    }

    /// Prints the final board and status, or the JSON snapshot.
    pub fn print_summary(&mut self, json: bool) -> Result<()> {
        if json {
            let snapshot = serde_json::to_string_pretty(&self.engine.snapshot())
                .context("Failed to serialise snapshot")?;
            writeln!(self.out, "{}", snapshot)?;
        } else {
            writeln!(self.out, "{}", render(self.engine.state()))?;
        }
        Ok(())
    }
}
