//! Optional TOML configuration for `gridtoe play`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "gridtoe.toml";

/// Board size. Missing values are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    #[serde(default)]
    cols: Option<usize>,

    /// Number of rows.
    #[serde(default)]
    rows: Option<usize>,
}

/// Random opponent settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OpponentConfig {
    /// Seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

/// Settings for an interactive game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size.
    #[serde(default)]
    board: BoardConfig,

    /// Random opponent settings.
    #[serde(default)]
    opponent: OpponentConfig,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads an explicit config file, or the default one if it exists.
    ///
    /// An explicit path must exist; a missing default file yields the
    /// default configuration.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces file values with command-line values where given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        cols: Option<usize>,
        rows: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if cols.is_some() {
            self.board.cols = cols;
        }
        if rows.is_some() {
            self.board.rows = rows;
        }
        if seed.is_some() {
            self.opponent.seed = seed;
        }
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
