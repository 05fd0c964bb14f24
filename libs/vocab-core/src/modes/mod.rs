//! Round protocols for each quiz mode.

pub mod choice;
pub mod fill;
pub mod fill_all;

use crate::console::{Console, Tone};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::types::{QuizMode, QuizSettings, RoundOutcome};
use rand::Rng;

/// What happened to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Graded(RoundOutcome),
    /// The user interrupted before the round could be graded.
    Interrupted,
}

/// Everything one round needs, borrowed from the session.
pub struct RoundContext<'a, R: ?Sized, C: ?Sized> {
    pub lexicon: &'a Lexicon,
    pub settings: &'a QuizSettings,
    pub rng: &'a mut R,
    pub console: &'a mut C,
    banner_width: &'a mut usize,
}

impl<'a, R, C> RoundContext<'a, R, C>
where
    R: Rng + ?Sized,
    C: Console + ?Sized,
{
    pub fn new(
        lexicon: &'a Lexicon,
        settings: &'a QuizSettings,
        rng: &'a mut R,
        console: &'a mut C,
        banner_width: &'a mut usize,
    ) -> Self {
        Self {
            lexicon,
            settings,
            rng,
            console,
            banner_width,
        }
    }

    /// Print the separator banner followed by `lead <word><tail>`.
    ///
    /// The banner grows to the longest question shown so far.
    fn announce(&mut self, lead: &str, word: &str, tail: &str) {
        let width = lead.chars().count() + word.chars().count() + tail.chars().count();
        *self.banner_width = (*self.banner_width).max(width);

        let banner = self
            .console
            .paint(&"$".repeat(*self.banner_width), Tone::Banner);
        self.console.say("");
        self.console.say(&banner);
        self.console.say("");

        let word = self.console.paint(word, Tone::Highlight);
        self.console.say(&format!("{lead}{word}{tail}"));
    }

    fn verdict(&mut self, text: &str, tone: Tone) {
        let line = self.console.paint(text, tone);
        self.console.say(&line);
    }

    /// Show the translation and synonym list after grading.
    fn explain(&mut self, word: &str, translation: &str, synonyms_label: &str, synonyms: &[String]) {
        let word = self.console.paint(word, Tone::Highlight);
        self.console
            .say(&format!("{word}'s translation are: {translation}."));
        if !synonyms.is_empty() {
            self.console.say(&format!(
                "{word}'s {synonyms_label} are {}.",
                synonyms.join(", ")
            ));
        }
        self.console.say("");
    }
}

impl QuizMode {
    /// Run one round of this mode.
    pub fn play_round<R, C>(self, ctx: &mut RoundContext<'_, R, C>) -> Result<Step>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        match self {
            Self::Choice => choice::play(ctx),
            Self::Fill => fill::play(ctx),
            Self::FillAll => fill_all::play(ctx),
        }
    }
}
