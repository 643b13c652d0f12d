//! Tic-tac-toe on rectangular boards of any size.
//!
//! The [`Game`] state machine owns a `cols` x `rows` [`Board`], the player
//! to move and the outcome. Moves are addressed by 1-based row-major
//! indices. After every move the whole board is scanned for a completed
//! row, column or `cols`-long diagonal; the first one found wins and its
//! cells are redrawn with a marker for the line's direction.
//!
//! # Example
//!
//! ```
//! use gridtoe::{Game, Mark, Outcome};
//!
//! let mut game = Game::new(3, 3)?;
//! for index in [1, 4, 5, 7, 9] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.winner(), Some(Outcome::Winner(Mark::X)));
//! assert_eq!(game.render_play(), "\\|_|_\no|\\|_\no| |\\");
//! # Ok::<(), gridtoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod position;
mod render;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{Axis, GameError};
pub use game::Game;
pub use position::Position;
pub use types::{Cell, Mark, Orientation, Outcome};
