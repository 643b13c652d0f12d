//! Interactive game session: dimension prompts, turn loop and outcome.

use crate::config::GameConfig;
use crate::console::Console;
use crate::players::{HumanPlayer, Player, RandomPlayer};
use anyhow::{Result, bail};
use gridtoe::{Axis, Game, Mark, Outcome};
use tracing::{info, instrument, warn};

/// Play view and help view side by side, tab separated.
pub fn side_by_side(game: &Game) -> String {
    let play = game.render_play();
    let help = game.render_help();
    play.lines()
        .zip(help.lines())
        .map(|(left, right)| format!("{left}\t{right}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asks for a board dimension until a positive integer is entered.
///
/// # Errors
///
/// Fails if input ends before a valid answer.
#[instrument(skip(console))]
pub fn prompt_dimension(console: &mut dyn Console, axis: Axis) -> Result<usize> {
    let label = match axis {
        Axis::Columns => "columns",
        Axis::Rows => "rows",
    };
    loop {
        let Some(line) = console.read_line(&format!("Select number of {label}: "))? else {
            bail!("Input closed while waiting for the number of {label}");
        };
        match line.trim().parse::<i64>() {
            Ok(value) if value >= 1 => return Ok(usize::try_from(value)?),
            Ok(value) => console.say(&format!(
                "Number of {label} must be greater than zero: {axis}={value}\n"
            ))?,
            Err(e) => console.say(&format!("Not a number '{}': {}\n", line.trim(), e))?,
        }
    }
}

/// A single game between two players, X moving first.
pub struct GameSession {
    game: Game,
    x: Box<dyn Player>,
    o: Box<dyn Player>,
}

impl GameSession {
    /// Creates a session around a fresh game.
    pub fn new(game: Game, x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self { game, x, o }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs turns until the game has an outcome, then prints it.
    ///
    /// Rejected moves are reported and the same player is asked again.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move (e.g. input closed) or on
    /// output errors.
    #[instrument(skip_all, fields(cols = self.game.cols(), rows = self.game.rows()))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Outcome> {
        info!(x = self.x.name(), o = self.o.name(), "Session started");

        let outcome = loop {
            if let Some(outcome) = self.game.winner() {
                break outcome;
            }

            console.say(&format!("{}\n\n", side_by_side(&self.game)))?;

            let player = match self.game.current_player() {
                Mark::X => &mut self.x,
                Mark::O => &mut self.o,
            };
            loop {
                let index = player.choose_move(&self.game, console)?;
                match self.game.apply_move(index) {
                    Ok(()) => break,
                    Err(err) if err.is_recoverable() => {
                        warn!(player = player.name(), index, error = %err, "Move rejected");
                        console.say(&format!("{err}\n\n"))?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };

        console.say(&format!(
            "{}\n\n{}\n\nEnd of game. Bye!\n",
            self.game.render_play(),
            outcome
        ))?;
        info!(%outcome, moves = self.game.history().len(), "Session finished");
        Ok(outcome)
    }
}

/// Human (X) against the random bot (O), with dimensions from the config
/// or prompted.
///
/// # Errors
///
/// Fails on invalid configured dimensions, closed input or output errors.
#[instrument(skip(console))]
pub fn play(config: &GameConfig, console: &mut dyn Console) -> Result<Outcome> {
    let cols = match config.board().cols() {
        Some(cols) => *cols,
        None => prompt_dimension(console, Axis::Columns)?,
    };
    let rows = match config.board().rows() {
        Some(rows) => *rows,
        None => prompt_dimension(console, Axis::Rows)?,
    };
    console.say("\n")?;

    let game = Game::new(cols, rows)?;
    let human = HumanPlayer::new("Player");
    let bot = RandomPlayer::new("Bot", *config.opponent().seed());
    info!(seed = bot.seed(), "Opponent ready");

    GameSession::new(game, Box::new(human), Box::new(bot)).run(console)
}
