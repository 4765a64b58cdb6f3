//! The `quizline highscore` command.

use std::path::PathBuf;

use anyhow::Result;

use quizline_core::highscore::HighScoreFile;
use quizline_core::session::{format_percentage, percentage};

use crate::config::load_config_from;

pub fn execute(
    highscore: Option<PathBuf>,
    reset: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let path = match highscore {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.highscore_path,
    };
    let file = HighScoreFile::new(path);

    if reset {
        if file.reset()? {
            println!("Removed high score at {}", file.path().display());
        } else {
            println!("No high score to remove.");
        }
        return Ok(());
    }

    let best = file.load();
    match &best.name {
        Some(name) => println!(
            "High score: {}/{} ({}%) by {}",
            best.score,
            best.total,
            format_percentage(percentage(best.score, best.total)),
            name
        ),
        None => println!("No high score recorded yet."),
    }

    Ok(())
}
