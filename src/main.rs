//! Noughts - terminal harness for the tic-tac-toe engine.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, GameEngine, HarnessConfig, MarkerAssignment, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = HarnessConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(marker) = cli.player1 {
        config = config.with_player1_marker(marker);
    }

    init_tracing(&config);

    let engine =
        GameEngine::with_markers(MarkerAssignment::new(*config.game().player1_marker()));

    match cli.command {
        Command::Play => run_play(engine),
        Command::Run { json, commands } => run_script(engine, &commands, json),
    }
}

/// Logs go to stderr so stdout carries only the board.
fn init_tracing(config: &HarnessConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(engine))]
fn run_play(engine: GameEngine) -> Result<()> {
    info!("Starting interactive play");
    let stdin = std::io::stdin();
    let mut session = Session::new(engine, std::io::stdout());
    session.run_interactive(stdin.lock())
}

/// Apply scripted commands and print the result
#[instrument(skip(engine))]
fn run_script(engine: GameEngine, commands: &[String], json: bool) -> Result<()> {
    let mut session = Session::new(engine, std::io::stdout());
    session.run_script(commands)?;
    session.print_summary(json)
}
