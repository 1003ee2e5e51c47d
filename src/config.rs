//! Harness configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::Marker;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level harness configuration.
///
/// ```toml
/// [game]
/// player1_marker = "O"
///
/// [logging]
/// filter = "noughts=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Game defaults.
    game: GameConfig,
    /// Tracing setup.
    logging: LoggingConfig,
}

/// Game defaults applied at session start.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Marker Player 1 starts with; Player 2 gets the other one.
    player1_marker: Marker,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_marker: Marker::X,
        }
    }
}

/// Tracing setup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[instrument]
fn default_filter() -> String {
    "warn".to_string()
}

impl HarnessConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player1_marker = %config.game.player1_marker, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides Player 1's starting marker.
    pub fn with_player1_marker(mut self, marker: Marker) -> Self {
        self.game.player1_marker = marker;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(*config.game().player1_marker(), Marker::X);
        assert_eq!(config.logging().filter(), "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nplayer1_marker = \"O\"").unwrap();

        let config = HarnessConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.game().player1_marker(), Marker::O);
        assert_eq!(config.logging().filter(), "warn");
    }

    #[test]
    fn test_invalid_marker_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nplayer1_marker = \"Z\"").unwrap();

        let err = HarnessConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarnessConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }
}
