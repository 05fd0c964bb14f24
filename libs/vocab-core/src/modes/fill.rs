//! Fill-in rounds: type any one synonym.

use super::{RoundContext, Step};
use crate::console::{Console, Tone};
use crate::error::Result;
use crate::matching::find_match;
use crate::sampler;
use crate::types::RoundOutcome;
use rand::Rng;

/// Grade a typed answer against a word's synonyms.
pub fn grade<S: AsRef<str>>(answer: &str, synonyms: &[S], tolerance: usize) -> RoundOutcome {
    match find_match(answer.trim(), synonyms, tolerance) {
        Some(_) => RoundOutcome::Correct,
        None => RoundOutcome::Incorrect,
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

    ctx.announce("Write a synonym of ", word, ":");
    let Some(answer) = ctx.console.ask("Answer: ") else {
        return Ok(Step::Interrupted);
    };
    ctx.console.say("");

    let outcome = grade(&answer, synonyms, ctx.settings.edit_distance_tolerance);
    match outcome {
        RoundOutcome::Correct => ctx.verdict("Correct answer!", Tone::Success),
        _ => ctx.verdict("Wrong answer!", Tone::Failure),
    }
    ctx.explain(word, translation, "possible synonyms", synonyms);

    Ok(Step::Graded(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_synonym_within_tolerance_is_correct() {
        let synonyms = ["glad", "cheerful"];
        assert_eq!(grade("cheerfull", &synonyms, 2), RoundOutcome::Correct);
        assert_eq!(grade("glad", &synonyms, 0), RoundOutcome::Correct);
    }

    #[test]
    fn answer_is_trimmed() {
        assert_eq!(grade("  glad \t", &["glad"], 0), RoundOutcome::Correct);
    }

    #[test]
    fn distant_answer_is_wrong() {
        assert_eq!(grade("sad", &["glad"], 0), RoundOutcome::Incorrect);
        assert_eq!(grade("", &["glad"], 2), RoundOutcome::Incorrect);
    }

    #[test]
    fn tolerance_is_inclusive() {
        assert_eq!(grade("gl", &["glad"], 2), RoundOutcome::Correct);
        assert_eq!(grade("g", &["glad"], 2), RoundOutcome::Incorrect);
    }
}
