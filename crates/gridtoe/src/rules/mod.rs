//! Game rules for grid tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the game state machine so they can be tested on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, candidate_lines, find_winning_line};
