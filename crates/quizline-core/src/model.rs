//! Core data model types for quizline.
//!
//! A question always has exactly four choices, addressed by the letters A–D
//! in their canonical (file) order.

use std::fmt;
use std::str::FromStr;

/// One of the four answer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// All letters in canonical order.
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// Zero-based canonical position of this letter.
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
        }
    }

    /// Letter for a zero-based canonical position.
    pub fn from_index(index: usize) -> Option<Letter> {
        Letter::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            other => Err(format!("unknown answer letter: {other}")),
        }
    }
}

/// A single multiple-choice question.
///
/// Records are read-only once loaded. Construction through [`QuestionRecord::new`]
/// guarantees the four-choice invariant at the type level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// The question text.
    pub prompt: String,
    /// Choices in canonical order A–D.
    pub options: [String; 4],
    /// Canonical position of the correct choice.
    pub correct: Letter,
}

impl QuestionRecord {
    pub fn new(prompt: impl Into<String>, options: [&str; 4], correct: Letter) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct,
        }
    }

    /// Text of the choice at `letter`.
    pub fn option(&self, letter: Letter) -> &str {
        &self.options[letter.index()]
    }

    /// Text of the correct choice.
    pub fn correct_text(&self) -> &str {
        self.option(self.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_display_and_parse() {
        assert_eq!(Letter::C.to_string(), "C");
        assert_eq!("b".parse::<Letter>().unwrap(), Letter::B);
        assert_eq!(" d ".parse::<Letter>().unwrap(), Letter::D);
        assert!("E".parse::<Letter>().is_err());
        assert!("".parse::<Letter>().is_err());
        assert!("AB".parse::<Letter>().is_err());
    }

    #[test]
    fn letter_index_roundtrip() {
        for (i, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(*letter));
        }
        assert_eq!(Letter::from_index(4), None);
    }

    #[test]
    fn correct_text_follows_letter() {
        let q = QuestionRecord::new("2 + 2?", ["3", "4", "5", "22"], Letter::B);
        assert_eq!(q.correct_text(), "4");
        assert_eq!(q.option(Letter::D), "22");
    }
}
