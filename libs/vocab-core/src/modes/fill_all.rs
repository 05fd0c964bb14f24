//! Fill-all rounds: type every synonym of a word, comma separated.

use super::{RoundContext, Step};
use crate::console::{Console, Tone};
use crate::error::{QuizError, Result};
use crate::matching::{coverage, Coverage};
use crate::sampler;
use crate::types::RoundOutcome;
use rand::Rng;

/// Split a comma-separated reply into trimmed answers.
///
/// Empty answers still count and are graded like any other. Fails when
/// fewer than `required` answers were given.
pub fn collect_answers(input: &str, required: usize) -> Result<Vec<String>> {
    let answers: Vec<String> = input.split(',').map(|s| s.trim().to_string()).collect();

    if answers.len() < required {
        return Err(QuizError::MalformedInput(format!(
            "expected at least {required} answers, got {}",
            answers.len()
        )));
    }
    Ok(answers)
}

/// Grade answers against every synonym of a word.
pub fn grade<A: AsRef<str>, S: AsRef<str>>(
    answers: &[A],
    synonyms: &[S],
    tolerance: usize,
) -> RoundOutcome {
    let result: Coverage = coverage(answers, synonyms, tolerance);
    if result.is_complete() {
        RoundOutcome::Correct
    } else {
        RoundOutcome::Partial {
            covered: result.covered,
            required: result.required,
        }
    }
}

pub(crate) fn play<R, C>(ctx: &mut RoundContext<'_, R, C>) -> Result<Step>
where
    R: Rng + ?Sized,
    C: Console + ?Sized,
{
    let lexicon = ctx.lexicon;
    let word = sampler::pick(&mut *ctx.rng, lexicon.words())?;
    let synonyms = lexicon.lookup_synonyms(word)?;
    let translation = lexicon.lookup_translation(word)?;

    ctx.announce("Write all the synonyms of ", word, " (separated by comma):");
    let answers = loop {
        let Some(reply) = ctx.console.ask("Answer: ") else {
            return Ok(Step::Interrupted);
        };
        match collect_answers(&reply, synonyms.len()) {
            Ok(answers) => break answers,
            Err(e) => {
                tracing::debug!(error = %e, "Reprompting for answers");
                ctx.console.say(&format!(
                    "Number of correct synonyms: {}. Try again!",
                    synonyms.len()
                ));
            }
        }
    };
    ctx.console.say("");

    let outcome = grade(&answers, synonyms, ctx.settings.edit_distance_tolerance);
    match outcome {
        RoundOutcome::Partial { covered, .. } => {
            let lead = ctx.console.paint("You got", Tone::Failure);
            let tail = ctx.console.paint("correct", Tone::Failure);
            ctx.console.say(&format!("{lead} {covered} {tail}."));
        }
        _ => ctx.verdict("Correct answers!", Tone::Success),
    }
    ctx.explain(word, translation, "possible synonyms", synonyms);

    Ok(Step::Graded(outcome))
}
