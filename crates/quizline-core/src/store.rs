//! Question store: built-in questions and the external JSON question file.
//!
//! Loading for play never fails. Anything wrong with the external file (missing,
//! unreadable, not a list, empty, or any malformed record) falls back to the
//! built-in set as a whole; a partially valid file is never adopted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuestionError;
use crate::model::{Letter, QuestionRecord};

/// On-disk shape of a single question.
#[derive(Debug, Serialize, Deserialize)]
struct JsonQuestion {
    #[serde(alias = "prompt", alias = "question")]
    q: String,
    #[serde(alias = "options")]
    choices: Vec<String>,
    answer: String,
}

impl JsonQuestion {
    fn into_record(self, index: usize) -> Result<QuestionRecord, QuestionError> {
        if self.q.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { index });
        }

        let found = self.choices.len();
        let options: [String; 4] = self
            .choices
            .try_into()
            .map_err(|_| QuestionError::WrongChoiceCount { index, found })?;

        let correct: Letter = self
            .answer
            .parse()
            .map_err(|_| QuestionError::InvalidAnswer {
                index,
                value: self.answer.clone(),
            })?;

        Ok(QuestionRecord {
            prompt: self.q,
            options,
            correct,
        })
    }
}

impl From<&QuestionRecord> for JsonQuestion {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            q: record.prompt.clone(),
            choices: record.options.to_vec(),
            answer: record.correct.to_string(),
        }
    }
}

/// Where the questions of a store came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// The fixed set compiled into the binary.
    BuiltIn,
    /// An external question file.
    File(PathBuf),
}

/// An immutable, ordered list of questions.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<QuestionRecord>,
    source: QuestionSource,
}

impl QuestionStore {
    pub fn new(questions: Vec<QuestionRecord>, source: QuestionSource) -> Self {
        Self { questions, source }
    }

    /// The built-in five-question store.
    pub fn builtin() -> Self {
        Self::new(builtin_questions(), QuestionSource::BuiltIn)
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }
}

/// The fixed question set used whenever no usable external file exists.
pub fn builtin_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            "Which language runs in a web browser?",
            ["Java", "C", "Python", "JavaScript"],
            Letter::D,
        ),
        QuestionRecord::new(
            "What does CPU stand for?",
            [
                "Central Process Unit",
                "Central Processing Unit",
                "Computer Personal Unit",
                "Central Processor Utility",
            ],
            Letter::B,
        ),
        QuestionRecord::new(
            "Which data structure uses FIFO?",
            ["Stack", "Queue", "Tree", "Graph"],
            Letter::B,
        ),
        QuestionRecord::new("What is the value of 2**3?", ["6", "8", "9", "12"], Letter::B),
        QuestionRecord::new(
            "HTTP status 404 means:",
            ["OK", "Forbidden", "Not Found", "Server Error"],
            Letter::C,
        ),
    ]
}

/// Load the questions for a session.
///
/// Uses `external` when it names a file holding a non-empty list of
/// well-formed records, and the built-in set otherwise. Never fails.
pub fn load_questions(external: Option<&Path>) -> QuestionStore {
    let Some(path) = external else {
        return QuestionStore::builtin();
    };

    if !path.exists() {
        tracing::debug!("no question file at {}, using built-in set", path.display());
        return QuestionStore::builtin();
    }

    match parse_questions(path) {
        Ok(questions) => {
            tracing::debug!("loaded {} questions from {}", questions.len(), path.display());
            QuestionStore::new(questions, QuestionSource::File(path.to_path_buf()))
        }
        Err(e) => {
            tracing::debug!("ignoring {}: {e:#}", path.display());
            QuestionStore::builtin()
        }
    }
}

/// Strictly parse a question file.
pub fn parse_questions(path: &Path) -> Result<Vec<QuestionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    parse_questions_str(&content)
        .with_context(|| format!("failed to parse question file: {}", path.display()))
}

/// Strictly parse question JSON (useful for testing).
pub fn parse_questions_str(content: &str) -> Result<Vec<QuestionRecord>, QuestionError> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(QuestionError::NotAList(json_kind(&other))),
    };
    if items.is_empty() {
        return Err(QuestionError::Empty);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let raw: JsonQuestion = serde_json::from_value(item)?;
            raw.into_record(i + 1)
        })
        .collect()
}

/// Serialize questions in the external file format.
pub fn questions_to_json(questions: &[QuestionRecord]) -> Result<String> {
    let raw: Vec<JsonQuestion> = questions.iter().map(JsonQuestion::from).collect();
    serde_json::to_string_pretty(&raw).context("failed to serialize questions")
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// A warning about a well-formed but questionable question set.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// One-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a parsed question set for common authoring mistakes.
pub fn validate_questions(questions: &[QuestionRecord]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (i, q) in questions.iter().enumerate() {
        if !seen_prompts.insert(q.prompt.trim()) {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: format!("duplicate question: {}", q.prompt.trim()),
            });
        }
    }

    // Duplicate choice texts are indistinguishable on screen
    for (i, q) in questions.iter().enumerate() {
        let mut seen = HashSet::new();
        if q.options.iter().any(|o| !seen.insert(o.trim())) {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: "two or more choices have the same text".into(),
            });
        }
    }

    warnings
}
