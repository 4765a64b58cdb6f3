//! Error types for question loading and session play.
//!
//! `QuestionError` is only ever surfaced by the strict parser; the loader that
//! feeds the game swallows it and falls back to the built-in questions.

use thiserror::Error;

/// Errors found while parsing an external question file.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// The content was not valid JSON, or not shaped like question records.
    #[error("invalid question JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value was not an array.
    #[error("question file must contain a JSON array, found {0}")]
    NotAList(&'static str),

    /// The array was empty.
    #[error("question file contains no questions")]
    Empty,

    /// A record had something other than four choices.
    #[error("question {index}: expected 4 choices, found {found}")]
    WrongChoiceCount { index: usize, found: usize },

    /// A record's answer was not one of A, B, C, D.
    #[error("question {index}: answer must be one of A, B, C, D, got {value:?}")]
    InvalidAnswer { index: usize, value: String },

    /// A record's prompt was blank.
    #[error("question {index}: prompt is empty")]
    EmptyPrompt { index: usize },
}

/// Errors that end a playthrough early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream reached end-of-file while waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Returns `true` if the player simply stopped providing input.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, SessionError::InputClosed)
    }
}
