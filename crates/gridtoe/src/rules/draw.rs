//! Draw detection for grid tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// Only consulted after the win check, so a full board means a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
