//! quizline configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizline_core::game::{GameOptions, DEFAULT_PLAYER_NAME};
use quizline_core::highscore::DEFAULT_HIGHSCORE_FILE;
use quizline_core::session::{SessionOptions, DEFAULT_WRAP_WIDTH};

/// Narrowest wrap width accepted from config.
const MIN_WRAP_WIDTH: usize = 20;

/// Top-level quizline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizlineConfig {
    /// External question file, used when present and well-formed.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// Where the high score is stored.
    #[serde(default = "default_highscore_path")]
    pub highscore_path: PathBuf,
    /// Name used when the player enters none.
    #[serde(default = "default_player_name")]
    pub default_player_name: String,
    /// Column width for wrapping question text.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_highscore_path() -> PathBuf {
    PathBuf::from(DEFAULT_HIGHSCORE_FILE)
}
fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}
fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

impl Default for QuizlineConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            highscore_path: default_highscore_path(),
            default_player_name: default_player_name(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl QuizlineConfig {
    /// Game settings derived from this config.
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            questions_path: Some(self.questions_path.clone()),
            highscore_path: self.highscore_path.clone(),
            default_player_name: self.default_player_name.clone(),
            session: SessionOptions {
                wrap_width: self.wrap_width,
            },
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizline.toml` in the current directory
/// 2. `~/.config/quizline/config.toml`
///
/// Environment variable overrides: `QUIZLINE_QUESTIONS`, `QUIZLINE_HIGHSCORE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizlineConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizline.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizlineConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizlineConfig::default(),
    };

    if let Ok(questions) = std::env::var("QUIZLINE_QUESTIONS") {
        config.questions_path = PathBuf::from(questions);
    }
    if let Ok(highscore) = std::env::var("QUIZLINE_HIGHSCORE") {
        config.highscore_path = PathBuf::from(highscore);
    }

    anyhow::ensure!(
        config.wrap_width >= MIN_WRAP_WIDTH,
        "wrap_width must be at least {MIN_WRAP_WIDTH}"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizline"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizlineConfig::default();
        assert_eq!(config.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.highscore_path, PathBuf::from("quiz_highscore.json"));
        assert_eq!(config.default_player_name, "Player");
        assert_eq!(config.wrap_width, 72);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
questions_path = "trivia/questions.json"
wrap_width = 60
"#;
        let config: QuizlineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.questions_path, PathBuf::from("trivia/questions.json"));
        assert_eq!(config.highscore_path, PathBuf::from("quiz_highscore.json"));
        assert_eq!(config.wrap_width, 60);

        let options = config.game_options();
        assert_eq!(options.session.wrap_width, 60);
        assert_eq!(
            options.questions_path,
            Some(PathBuf::from("trivia/questions.json"))
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizline.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded_and_checked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizline.toml");

        std::fs::write(&path, "default_player_name = \"Anon\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_player_name, "Anon");

        std::fs::write(&path, "wrap_width = 5\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());

        std::fs::write(&path, "wrap_width = \"wide\"\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
