//! Terminal front end for [`gridtoe`].
//!
//! # Architecture
//!
//! - **Session**: turn loop between two [`Player`]s, printing both views
//! - **Players**: a human reading cell numbers and a seeded random bot
//! - **Scenario**: the scripted self-check behind `gridtoe test`
//! - **Config**: optional `gridtoe.toml` plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod players;
mod scenario;
mod session;

// Crate-level exports - Command line
pub use cli::{Cli, Command, invalid_mode_message};

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError, DEFAULT_CONFIG_PATH, GameConfig, OpponentConfig};

// Crate-level exports - Terminal I/O
pub use console::{Console, Terminal};

// Crate-level exports - Players
pub use players::{HumanPlayer, Player, RandomPlayer};

// Crate-level exports - Session
pub use scenario::run_scenario;
pub use session::{GameSession, play, prompt_dimension, side_by_side};
