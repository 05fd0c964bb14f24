//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default edit distance forgiven when grading typed answers.
pub const DEFAULT_TOLERANCE: usize = 2;

/// Default number of choices shown in a multiple-choice round.
pub const DEFAULT_CHOICES: usize = 5;

/// Question/answer protocol used for every round of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Pick the synonym out of a numbered list.
    Choice,
    /// Type any one synonym.
    Fill,
    /// Type every synonym, comma separated.
    #[default]
    FillAll,
}

impl QuizMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::Fill => "fill",
            Self::FillAll => "fill_all",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "choice" => Some(Self::Choice),
            "fill" => Some(Self::Fill),
            "fill_all" => Some(Self::FillAll),
            _ => None,
        }
    }
}

/// Settings a session runs with, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub mode: QuizMode,
    pub edit_distance_tolerance: usize,
    /// Mix the primary word into its synonyms (choice mode only).
    pub mix: bool,
    pub choices: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            mode: QuizMode::default(),
            edit_distance_tolerance: DEFAULT_TOLERANCE,
            mix: false,
            choices: DEFAULT_CHOICES,
        }
    }
}

/// One `word=translation=synonyms` line of a word bunch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub translation: String,
    pub synonyms: Vec<String>,
    pub line_number: usize,
}

/// How a graded round went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Incorrect,
    /// Some, but not all, synonyms were covered.
    Partial { covered: usize, required: usize },
}

impl RoundOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Count one graded round.
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.total += 1;
        if outcome.is_correct() {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}
