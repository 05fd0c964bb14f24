//! The line-oriented conversation a session holds with the user.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Emphasis a console may give to a fragment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The word being asked about.
    Highlight,
    /// Separator between questions.
    Banner,
    Success,
    Failure,
}

/// Where prompts go and answers come from.
pub trait Console {
    /// Write one line of output.
    fn say(&mut self, line: &str);

    /// Show `prompt` and block for one line of input.
    ///
    /// Returns `None` once the user has interrupted the session; the pending
    /// round must then be abandoned without scoring.
    fn ask(&mut self, prompt: &str) -> Option<String>;

    /// Decorate `text` for display. Plain by default.
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// Shared flag raised when the user asks to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
