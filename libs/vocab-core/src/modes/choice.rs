//! Multiple-choice rounds: pick the synonym from a numbered list.

use super::{RoundContext, Step};
use crate::console::{Console, Tone};
use crate::error::{QuizError, Result};
use crate::lexicon::Lexicon;
use crate::sampler;
use crate::types::RoundOutcome;
use rand::Rng;

/// A prepared multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    /// Word shown in the prompt.
    pub target: String,
    /// The correct choice.
    pub answer: String,
    /// Choices in display order.
    pub choices: Vec<String>,
    /// Position of the correct choice in `choices`.
    pub answer_slot: usize,
    /// Synonyms listed after grading.
    pub synonyms: Vec<String>,
}

impl ChoiceQuestion {
    /// Prepare a question about `word` with `choices` options.
    ///
    /// With `mix`, the word and its synonyms are shuffled together and the
    /// first two become the prompt and the answer.
    pub fn build<R: Rng + ?Sized>(
        rng: &mut R,
        lexicon: &Lexicon,
        word: &str,
        mix: bool,
        choices: usize,
    ) -> Result<Self> {
        let synonyms = lexicon.lookup_synonyms(word)?;

        let (target, answer, synonyms) = if mix {
            let pool: Vec<&str> = std::iter::once(word)
                .chain(synonyms.iter().map(String::as_str))
                .collect();
            match sampler::shuffle(rng, &pool).as_slice() {
                [target, answer, rest @ ..] => (
                    target.to_string(),
                    answer.to_string(),
                    rest.iter().map(|s| s.to_string()).collect(),
                ),
                _ => {
                    return Err(QuizError::InsufficientSize {
                        requested: 2,
                        available: pool.len(),
                    })
                }
            }
        } else {
            let answer = sampler::pick(rng, synonyms)?.clone();
            (word.to_string(), answer, synonyms.to_vec())
        };

        let others: Vec<&String> = lexicon.words().iter().filter(|w| *w != word).collect();
        let distractor_words = sampler::sample(rng, &others, choices.saturating_sub(1))?;

        let mut distractors = Vec::with_capacity(choices);
        for other in distractor_words {
            distractors.push(sampler::pick(rng, lexicon.lookup_synonyms(other)?)?.clone());
        }

        let mut shown = sampler::shuffle(rng, &distractors);
        let answer_slot = rng.random_range(0..=shown.len());
        shown.insert(answer_slot, answer.clone());

        Ok(Self {
            target,
            answer,
            choices: shown,
            answer_slot,
            synonyms,
        })
    }

    /// Choices are graded by text, so a distractor spelled like the answer
    /// also counts.
    pub fn is_correct(&self, slot: usize) -> bool {
        self.choices.get(slot) == Some(&self.answer)
    }
}

/// Parse a typed choice number.
pub fn parse_slot(input: &str, choices: usize) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(slot) if slot < choices => Ok(slot),
        _ => Err(QuizError::MalformedInput(format!(
            "expected a number from 0 to {}, got {input:?}",
            choices.saturating_sub(1)
        ))),
    }
}

pub(crate) fn play<R, C>(ctx: &mut RoundContext<'_, R, C>) -> Result<Step>
where
    R: Rng + ?Sized,
    C: Console + ?Sized,
{
    let lexicon = ctx.lexicon;
    let settings = ctx.settings;

    let word = sampler::pick(&mut *ctx.rng, lexicon.words())?;
    let translation = lexicon.lookup_translation(word)?;
    let question =
        ChoiceQuestion::build(&mut *ctx.rng, lexicon, word, settings.mix, settings.choices)?;

    ctx.announce("Choose synonym of ", &question.target, ":");
    for (i, choice) in question.choices.iter().enumerate() {
        ctx.console.say(&format!("{i}. {choice}"));
    }

    let slot = loop {
        ctx.console.say("");
        let Some(reply) = ctx.console.ask("Answer: ") else {
            return Ok(Step::Interrupted);
        };
        match parse_slot(&reply, question.choices.len()) {
            Ok(slot) => break slot,
            Err(e) => {
                tracing::debug!(error = %e, "Reprompting for choice");
                ctx.console.say("Incorrect input. Try again :(");
            }
        }
    };
    ctx.console.say("");

    let outcome = if question.is_correct(slot) {
        ctx.verdict("Correct answer!", Tone::Success);
        RoundOutcome::Correct
    } else {
        ctx.verdict("Incorrect answer!", Tone::Failure);
        RoundOutcome::Incorrect
    };

    let label = if settings.mix {
        "other synonyms"
    } else {
        "possible synonyms"
    };
    ctx.explain(&question.target, translation, label, &question.synonyms);

    Ok(Step::Graded(outcome))
}
