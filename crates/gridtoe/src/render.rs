//! Text views of a board.

use super::{Board, Cell};

/// Playing view: cell symbols separated by `|`, one row per line.
///
/// Empty cells in the bottom row print as a blank instead of `_`.
pub fn play_view(board: &Board) -> String {
    let last_row = board.rows() - 1;
    board
        .rows_iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty if r == last_row => ' ',
                    cell => cell.symbol(),
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helper view: empty cells show their 1-based index.
///
/// Every cell is right-aligned to the width of the largest index.
pub fn help_view(board: &Board) -> String {
    let cols = board.cols();
    let width = board.cell_count().to_string().len();
    board
        .rows_iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| match cell {
                    Cell::Empty => format!("{:>width$}", r * cols + c + 1),
                    cell => format!("{:>width$}", cell.symbol()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
