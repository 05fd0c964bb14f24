//! The question loop and its running score.

use crate::console::{CancelToken, Console};
use crate::error::{QuizError, Result};
use crate::lexicon::Lexicon;
use crate::modes::{RoundContext, Step};
use crate::types::{QuizMode, QuizSettings, Score};
use rand::Rng;

/// A quiz session over one lexicon.
///
/// Rounds repeat until the user interrupts; only fully graded rounds are
/// counted.
pub struct Session<'a> {
    lexicon: &'a Lexicon,
    settings: QuizSettings,
    score: Score,
    banner_width: usize,
}

impl<'a> Session<'a> {
    /// Validate `settings` against `lexicon` before any round is played.
    pub fn new(lexicon: &'a Lexicon, settings: QuizSettings) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(QuizError::EmptyLexicon);
        }
        if settings.mode == QuizMode::Choice {
            // one distinct distractor word per choice besides the answer
            let requested = settings.choices;
            if requested > lexicon.len() {
                return Err(QuizError::InsufficientSize {
                    requested,
                    available: lexicon.len(),
                });
            }
        }

        Ok(Self {
            lexicon,
            settings,
            score: Score::default(),
            banner_width: 0,
        })
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Play rounds until `cancel` is raised or the console reports an
    /// interrupt, then print the result.
    pub fn run<R, C>(&mut self, rng: &mut R, console: &mut C, cancel: &CancelToken) -> Result<Score>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        tracing::info!(
            mode = self.settings.mode.as_str(),
            words = self.lexicon.len(),
            "Session started"
        );

        while !cancel.is_cancelled() {
            match self.play_round(rng, console)? {
                Step::Graded(outcome) if cancel.is_cancelled() => {
                    tracing::debug!(?outcome, "Round cancelled before scoring");
                    break;
                }
                Step::Graded(outcome) => {
                    self.score.record(outcome);
                    tracing::debug!(?outcome, score = %self.score, "Round graded");
                }
                Step::Interrupted => break,
            }
        }

        console.say("");
        console.say("");
        console.say(&format!("Result: {}", self.score));
        console.say("Exiting...");

        tracing::info!(score = %self.score, "Session finished");
        Ok(self.score)
    }

    /// Play a single round without touching the score.
    pub fn play_round<R, C>(&mut self, rng: &mut R, console: &mut C) -> Result<Step>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        let mut ctx = RoundContext::new(
            self.lexicon,
            &self.settings,
            rng,
            console,
            &mut self.banner_width,
        );
        self.settings.mode.play_round(&mut ctx)
    }
}
