//! Opponent that plays a uniformly random legal cell.

use super::Player;
use crate::console::Console;
use anyhow::{Context, Result};
use gridtoe::Game;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Random bot; reproducible when built from a seed.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a bot. Without a seed one is drawn from the OS.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        debug!(seed, "Random opponent seeded");
        Self {
            name: name.into(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed the bot was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, game, _console), fields(player = %self.name))]
    fn choose_move(&mut self, game: &Game, _console: &mut dyn Console) -> Result<usize> {
        let index = game
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .context("No legal moves available")?;
        debug!(index, "Bot chose cell");
        Ok(index)
    }
}
