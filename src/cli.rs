//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::{EngineError, Marker};
use std::path::PathBuf;

/// Noughts - headless tic-tac-toe with configurable markers
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Marker for Player 1 (overrides the config file)
    #[arg(long, global = true, value_parser = parse_marker)]
    pub player1: Option<Marker>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply a list of commands and print the final position
    Run {
        /// Print the final state as JSON instead of a grid
        #[arg(long)]
        json: bool,

        /// Commands, e.g. `0 3 1` or `"marker 1 O" 4`
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

fn parse_marker(text: &str) -> Result<Marker, EngineError> {
    Marker::parse(text)
}
