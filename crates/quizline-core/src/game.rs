//! Top-level replay loop.
//!
//! Owns the parts of a run that sit around a session: the banner, the current
//! high score, name entry, picking the question store, recording the result,
//! and asking whether to play again.

use std::path::PathBuf;

use rand::Rng;

use crate::console::{ask_yes_no, banner, rule, Console};
use crate::error::SessionError;
use crate::highscore::{HighScoreFile, DEFAULT_HIGHSCORE_FILE};
use crate::session::{SessionOptions, SessionResult, SessionRunner};
use crate::store::{load_questions, QuestionSource};

/// Name used when the player enters nothing.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Settings for a run of the game.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// External question file; the built-in set is used when absent or unusable.
    pub questions_path: Option<PathBuf>,
    pub highscore_path: PathBuf,
    /// Substituted for an empty name.
    pub default_player_name: String,
    pub session: SessionOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            questions_path: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            session: SessionOptions::default(),
        }
    }
}

/// Everything played before the player declined another round.
#[derive(Debug, Clone, Default)]
pub struct GameSummary {
    pub sessions: Vec<SessionResult>,
}

pub struct Game {
    options: GameOptions,
    highscore: HighScoreFile,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        let highscore = HighScoreFile::new(options.highscore_path.clone());
        Self { options, highscore }
    }

    /// Play rounds until the player declines to continue.
    pub fn run<C, R>(&self, console: &mut C, rng: &mut R) -> Result<GameSummary, SessionError>
    where
        C: Console + ?Sized,
        R: Rng,
    {
        let mut summary = GameSummary::default();

        loop {
            let result = self.play_round(console, rng)?;
            summary.sessions.push(result);

            if ask_yes_no(console, "Do you want to play again?")? {
                console.say("")?;
                console.say("Restarting...")?;
                console.say("")?;
            } else {
                console.say("")?;
                console.say("Thanks for playing! 👋")?;
                return Ok(summary);
            }
        }
    }

    fn play_round<C, R>(&self, console: &mut C, rng: &mut R) -> Result<SessionResult, SessionError>
    where
        C: Console + ?Sized,
        R: Rng,
    {
        banner(console, "QUIZ GAME")?;

        let best = self.highscore.load();
        if let Some(name) = &best.name {
            console.say(&format!(
                "🏆 Current High Score: {}/{} by {}",
                best.score, best.total, name
            ))?;
            console.say(&rule('-'))?;
        }

        let entered = console
            .ask("Enter your name: ")?
            .ok_or(SessionError::InputClosed)?;
        let name = match entered.trim() {
            "" => self.options.default_player_name.clone(),
            name => name.to_string(),
        };

        let store = load_questions(self.options.questions_path.as_deref());
        if let QuestionSource::File(path) = store.source() {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            console.say("")?;
            console.say(&format!("Loaded custom questions from {file_name} ✅"))?;
        }

        let result = SessionRunner::new(&store)
            .with_options(self.options.session.clone())
            .run(&name, console, rng)?;

        if self.highscore.record(&name, result.score, result.total) {
            tracing::info!(
                player = %name,
                score = result.score,
                total = result.total,
                "new high score"
            );
        }

        Ok(result)
    }
}
