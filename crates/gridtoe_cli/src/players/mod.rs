//! Player implementations that pick moves for the session.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::console::Console;
use anyhow::Result;
use gridtoe::Game;

/// Something that chooses a cell to play.
pub trait Player {
    /// Display name of the player.
    fn name(&self) -> &str;

    /// Chooses a 1-based cell index for the current turn.
    ///
    /// The index may still be rejected by the game; the session reports
    /// the error and asks again.
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<usize>;
}
