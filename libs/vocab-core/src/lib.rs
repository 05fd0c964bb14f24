//! Core quiz engine for the essential-words vocabulary drill.
//!
//! Provides:
//! - Parser for `word=translation=synonym,synonym` word bunches
//! - Read-only lexicon of synonyms and translations
//! - Random sampling without replacement
//! - Answer matching (Levenshtein distance with tolerance)
//! - Round protocols for choice, fill and fill-all modes
//! - The session loop and its score

pub mod console;
pub mod error;
pub mod lexicon;
pub mod matching;
pub mod modes;
pub mod parser;
pub mod sampler;
pub mod session;
pub mod types;

pub use console::{CancelToken, Console, Tone};
pub use error::{ParseError, QuizError, Result};
pub use lexicon::Lexicon;
pub use matching::{coverage, edit_distance, find_match, is_match, Coverage};
pub use modes::{RoundContext, Step};
pub use parser::parse;
pub use session::Session;
pub use types::{
    QuizMode, QuizSettings, RoundOutcome, Score, WordRecord, DEFAULT_CHOICES, DEFAULT_TOLERANCE,
};
