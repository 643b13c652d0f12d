//! Scripted self-check run by `gridtoe test`.
//!
//! Plays 1, 4, 5, 7, 9 on a 3x3 board, printing both views after every
//! move and comparing them with the expected text.

use crate::console::Console;
use anyhow::{Result, ensure};
use gridtoe::{Game, Mark, Outcome};
use tracing::{info, instrument};

fn check(actual: &str, expected: &str, what: &str) -> Result<()> {
    ensure!(
        actual == expected,
        "{what}\nexpected:\n{expected}\nactual:\n{actual}"
    );
    Ok(())
}

fn show(console: &mut dyn Console, game: &Game) -> Result<()> {
    console.say(&format!("{}\n\n{}\n\n", game.render_play(), game.render_help()))?;
    Ok(())
}

/// Runs the scripted game.
///
/// # Errors
///
/// Returns the name of the first view that did not match.
#[instrument(skip_all)]
pub fn run_scenario(console: &mut dyn Console) -> Result<()> {
    let mut game = Game::new(3, 3)?;
    show(console, &game)?;
    check(&game.render_play(), "_|_|_\n_|_|_\n | | ", "Bad initial placement output")?;
    check(&game.render_help(), "1|2|3\n4|5|6\n7|8|9", "Bad initial help output")?;

    game.apply_move(1)?;
    show(console, &game)?;
    check(&game.render_play(), "x|_|_\n_|_|_\n | | ", "Bad first step placement output")?;

    game.apply_move(4)?;
    show(console, &game)?;
    check(&game.render_help(), "x|2|3\no|5|6\n7|8|9", "Bad second step help output")?;

    game.apply_move(5)?;
    show(console, &game)?;

    game.apply_move(7)?;
    show(console, &game)?;
    check(&game.render_play(), "x|_|_\no|x|_\no| | ", "Bad prev step placement output")?;

    game.apply_move(9)?;
    show(console, &game)?;
    check(&game.render_play(), "\\|_|_\no|\\|_\no| |\\", "Bad final placement output")?;
    check(&game.render_help(), "\\|_|_\no|\\|_\no| |\\", "Bad final help output")?;
    ensure!(
        game.winner() == Some(Outcome::Winner(Mark::X)),
        "Bad winner: {:?}",
        game.winner()
    );

    console.say("All checks passed.\n")?;
    info!("Scenario passed");
    Ok(())
}
