//! Common test utilities for session integration tests.
//!
//! This module provides:
//! - ScriptedConsole, a console fed from a list of canned replies
//! - Helpers for building small lexicons

#![allow(dead_code)]

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{CancelToken, Console, Lexicon, WordRecord};

/// One scripted user action.
#[derive(Debug, Clone)]
pub enum Reply {
    Line(String),
    /// Ctrl+C while the prompt is waiting.
    Interrupt,
    /// Raise the cancel token, then answer with the line.
    CancelAfter(String),
}

pub fn line(text: &str) -> Reply {
    Reply::Line(text.to_string())
}

/// Console that replays canned replies and records everything shown.
///
/// Running out of replies behaves like an interrupt.
pub struct ScriptedConsole {
    replies: VecDeque<Reply>,
    cancel: CancelToken,
    pub output: Vec<String>,
    pub prompts: usize,
}

impl ScriptedConsole {
    pub fn new(replies: Vec<Reply>, cancel: CancelToken) -> Self {
        Self {
            replies: replies.into(),
            cancel,
            output: Vec::new(),
            prompts: 0,
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn last_line(&self) -> &str {
        self.output.last().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.output.iter().any(|l| l.contains(text))
    }

    pub fn count(&self, text: &str) -> usize {
        self.output.iter().filter(|l| l.contains(text)).count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.prompts += 1;
        self.output.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(Reply::Line(text)) => Some(text),
            Some(Reply::CancelAfter(text)) => {
                self.cancel.cancel();
                Some(text)
            }
            Some(Reply::Interrupt) | None => {
                self.cancel.cancel();
                None
            }
        }
    }
}

/// Build a lexicon from `(word, translation, "syn,syn")` triples.
pub fn lexicon(entries: &[(&str, &str, &str)]) -> Lexicon {
    Lexicon::from_records(entries.iter().enumerate().map(
        |(i, (word, translation, synonyms))| WordRecord {
            word: word.to_string(),
            translation: translation.to_string(),
            synonyms: synonyms.split(',').map(String::from).collect(),
            line_number: i + 1,
        },
    ))
    .expect("test lexicon should not be empty")
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
