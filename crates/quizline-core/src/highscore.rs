//! Persisted high score.
//!
//! The high-score file is a best-effort cache: reading it never fails (a missing
//! or corrupt file reads as "no high score") and a failed write is logged and
//! skipped rather than interrupting the game.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default file name for the high-score record.
pub const DEFAULT_HIGHSCORE_FILE: &str = "quiz_highscore.json";

/// The stored best result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    /// Player who set the score; `None` when nothing has been recorded.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: u32,
    /// Number of questions in the quiz the score was set on.
    #[serde(default)]
    pub total: u32,
}

impl HighScoreRecord {
    /// Whether a score has ever been recorded.
    pub fn is_set(&self) -> bool {
        self.name.is_some()
    }

    /// Whether a new result replaces this one.
    ///
    /// A strictly higher score replaces it, and so does any result from a quiz
    /// with a different number of questions, whatever its score.
    pub fn should_replace(&self, score: u32, total: u32) -> bool {
        score > self.score || total != self.total
    }
}

/// The high-score record on disk.
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record, treating any failure as "nothing stored".
    pub fn load(&self) -> HighScoreRecord {
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => HighScoreRecord::default(),
            Err(e) => {
                tracing::debug!("ignoring high score file: {e:#}");
                HighScoreRecord::default()
            }
        }
    }

    /// Read the stored record, returning `Ok(None)` if the file does not exist.
    pub fn try_load(&self) -> Result<Option<HighScoreRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let record = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(Some(record))
    }

    /// Store a finished result if it beats the current record.
    ///
    /// Re-reads the file, applies [`HighScoreRecord::should_replace`], and
    /// overwrites all three fields when it holds. Returns whether the file
    /// was written.
    pub fn record(&self, name: &str, score: u32, total: u32) -> bool {
        let current = self.load();
        if !current.should_replace(score, total) {
            tracing::debug!(
                score,
                total,
                best = current.score,
                "result does not replace high score"
            );
            return false;
        }

        let record = HighScoreRecord {
            name: Some(name.to_string()),
            score,
            total,
        };
        match self.write(&record) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("skipping high score write: {e:#}");
                false
            }
        }
    }

    /// Remove the stored record. Returns whether a file was deleted.
    pub fn reset(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                Err(e).with_context(|| format!("failed to remove {}", self.path.display()))
            }
        }
    }

    // Written through a sibling temp file so a crash never leaves half a record.
    fn write(&self, record: &HighScoreRecord) -> Result<()> {
        let json = serde_json::to_string(record).context("failed to serialize high score")?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(score: u32, total: u32) -> HighScoreRecord {
        HighScoreRecord {
            name: Some("Ada".into()),
            score,
            total,
        }
    }

    #[test]
    fn replace_rule() {
        let best = stored(3, 5);
        assert!(!best.should_replace(2, 5));
        assert!(!best.should_replace(3, 5));
        assert!(best.should_replace(4, 5));
        assert!(best.should_replace(2, 4));
        assert!(best.should_replace(0, 6));
    }

    #[test]
    fn empty_record_is_replaced_by_any_real_quiz() {
        let empty = HighScoreRecord::default();
        assert!(!empty.is_set());
        assert!(empty.should_replace(0, 5));
        assert!(!empty.should_replace(0, 0));
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(DEFAULT_HIGHSCORE_FILE));
        assert_eq!(file.load(), HighScoreRecord::default());
        assert!(file.try_load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HIGHSCORE_FILE);
        for bad in ["not json", "[1, 2, 3]", r#"{"score": -4}"#] {
            std::fs::write(&path, bad).unwrap();
            let file = HighScoreFile::new(&path);
            assert_eq!(file.load(), HighScoreRecord::default(), "input: {bad}");
            assert!(file.try_load().is_err());
        }
    }

    #[test]
    fn partial_record_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HIGHSCORE_FILE);
        std::fs::write(&path, r#"{"name": "Bo"}"#).unwrap();

        let record = HighScoreFile::new(&path).load();
        assert_eq!(record.name.as_deref(), Some("Bo"));
        assert_eq!(record.score, 0);
        assert_eq!(record.total, 0);
    }

    #[test]
    fn record_follows_replace_rule() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(DEFAULT_HIGHSCORE_FILE));

        assert!(file.record("Ada", 3, 5));
        assert_eq!(file.load(), stored(3, 5));

        assert!(!file.record("Bo", 2, 5));
        assert_eq!(file.load(), stored(3, 5));

        assert!(file.record("Cy", 2, 4));
        assert_eq!(file.load().name.as_deref(), Some("Cy"));

        assert!(file.record("Di", 4, 4));
        assert_eq!(file.load().score, 4);
    }

    #[test]
    fn written_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HIGHSCORE_FILE);
        HighScoreFile::new(&path).record("Ada", 3, 5);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["score"], 3);
        assert_eq!(value["total"], 5);
    }

    #[test]
    fn unwritable_location_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("missing-dir").join("hs.json"));
        assert!(!file.record("Ada", 1, 1));
        assert_eq!(file.load(), HighScoreRecord::default());
    }

    #[test]
    fn reset_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(DEFAULT_HIGHSCORE_FILE));
        assert!(!file.reset().unwrap());
        file.record("Ada", 1, 1);
        assert!(file.reset().unwrap());
        assert!(!file.path().exists());
    }
}
