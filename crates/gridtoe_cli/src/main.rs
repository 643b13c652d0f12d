//! Gridtoe - terminal tic-tac-toe against a random opponent.

use anyhow::Result;
use clap::Parser;
use gridtoe_cli::{Cli, Command, GameConfig, Terminal, invalid_mode_message};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match invalid_mode_message(&err) {
            Some(message) => {
                println!("{message}");
                std::process::exit(err.exit_code());
            }
            None => err.exit(),
        },
    };

    match cli.command {
        Command::Play {
            cols,
            rows,
            seed,
            config,
        } => run_play(cols, rows, seed, config),
        Command::Test => run_test(),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
#[instrument]
fn run_play(
    cols: Option<usize>,
    rows: Option<usize>,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(cols, rows, seed);
    info!(?config, "Starting interactive game");

    let mut terminal = Terminal::stdio();
    gridtoe_cli::play(&config, &mut terminal)?;
    Ok(())
}

/// Run the scripted self-check
#[instrument]
fn run_test() -> Result<()> {
    let mut terminal = Terminal::stdio();
    gridtoe_cli::run_scenario(&mut terminal)
}
