//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The user typed something the current prompt cannot accept.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("cannot draw {requested} distinct items from {available}")]
    InsufficientSize { requested: usize, available: usize },

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("No words were found, try reading the help message (-h)")]
    EmptyLexicon,
}

/// Errors that can occur while parsing word-bunch records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {field} at line {line}")]
    MissingField { line: usize, field: &'static str },

    #[error("no synonyms at line {line}")]
    EmptySynonyms { line: usize },
}
