//! The `quizline play` command.

use std::io;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizline_core::console::LineConsole;
use quizline_core::game::Game;

use crate::config::load_config_from;
use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let mut options = config.game_options();
    if let Some(questions) = args.questions {
        options.questions_path = Some(questions);
    }
    if let Some(highscore) = args.highscore {
        options.highscore_path = highscore;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = LineConsole::new(stdin.lock(), stdout.lock());

    let summary = Game::new(options)
        .run(&mut console, &mut rng)
        .context("game ended unexpectedly")?;

    tracing::debug!(rounds = summary.sessions.len(), "game over");
    Ok(())
}
