//! Read-only word tables the quiz draws from.

use crate::error::{QuizError, Result};
use crate::types::WordRecord;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Entry {
    translation: String,
    synonyms: Vec<String>,
}

/// Word → synonyms and word → translation tables.
///
/// Every word carries a translation and at least one synonym. The table is
/// built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: BTreeMap<String, Entry>,
    words: Vec<String>,
}

impl Lexicon {
    /// Build the tables from parsed records. A later record for the same word
    /// replaces an earlier one.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = WordRecord>,
    {
        let mut entries = BTreeMap::new();

        for record in records {
            if record.synonyms.is_empty() {
                tracing::warn!(word = %record.word, "Skipping word without synonyms");
                continue;
            }
            let previous = entries.insert(
                record.word,
                Entry {
                    translation: record.translation,
                    synonyms: record.synonyms,
                },
            );
            if previous.is_some() {
                tracing::debug!(line = record.line_number, "Word redefined");
            }
        }

        if entries.is_empty() {
            return Err(QuizError::EmptyLexicon);
        }

        let words = entries.keys().cloned().collect();
        Ok(Self { entries, words })
    }

    /// All words, in a stable order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn lookup_synonyms(&self, word: &str) -> Result<&[String]> {
        self.entry(word).map(|e| e.synonyms.as_slice())
    }

    pub fn lookup_translation(&self, word: &str) -> Result<&str> {
        self.entry(word).map(|e| e.translation.as_str())
    }

    fn entry(&self, word: &str) -> Result<&Entry> {
        self.entries
            .get(word)
            .ok_or_else(|| QuizError::UnknownWord(word.to_string()))
    }
}
