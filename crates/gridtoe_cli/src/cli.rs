//! Command-line interface for gridtoe.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

/// Gridtoe - tic-tac-toe on any rectangular board
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe on any rectangular board against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mode to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available modes
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively as X against a random O
    Play {
        /// Number of columns (prompted if not set here or in the config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of rows (prompted if not set here or in the config)
        #[arg(long)]
        rows: Option<usize>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file (defaults to ./gridtoe.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Run the scripted 3x3 self-check
    Test,
}

/// Replaces clap's usage error for a missing or unknown mode.
///
/// Returns `None` for every other parse error, which clap reports itself.
pub fn invalid_mode_message(err: &clap::Error) -> Option<String> {
    let mode = match err.kind() {
        ErrorKind::InvalidSubcommand => match err.get(ContextKind::InvalidSubcommand) {
            Some(ContextValue::String(mode)) => mode.as_str(),
            _ => "",
        },
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => "",
        _ => return None,
    };
    Some(format!("Invalid argument '{mode}'. Available: 'test', 'play'"))
}
