//! Human player reading cell numbers from the console.

use super::Player;
use crate::console::Console;
use anyhow::{Result, bail};
use gridtoe::Game;
use tracing::{debug, instrument};

/// Human who types the index of a cell.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, _game, console), fields(player = %self.name))]
    fn choose_move(&mut self, _game: &Game, console: &mut dyn Console) -> Result<usize> {
        loop {
            let Some(line) = console.read_line("Your turn: ")? else {
                bail!("Input closed while waiting for a move");
            };
            match line.trim().parse::<i64>() {
                Ok(value) => {
                    // Negative numbers become 0, which the game reports as off the board.
                    let index = usize::try_from(value).unwrap_or(0);
                    debug!(value, index, "Human chose cell");
                    return Ok(index);
                }
                Err(e) => console.say(&format!("Not a cell number '{}': {}\n\n", line.trim(), e))?,
            }
        }
    }
}
