//! Answer matching for typed rounds (Levenshtein distance).

/// Calculate Levenshtein distance between two strings.
///
/// Case-sensitive and character-wise. Keeps a single row sized by the
/// shorter string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.chars().enumerate() {
        // row[j] of the previous pass, before it gets overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if sc == lc {
                diagonal
            } else {
                1 + diagonal // substitution
                    .min(above) // deletion
                    .min(row[j]) // insertion
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Whether `candidate` is within `tolerance` edits of `answer`.
pub fn is_match(candidate: &str, answer: &str, tolerance: usize) -> bool {
    edit_distance(candidate, answer) <= tolerance
}

/// First of `answers` that `candidate` matches.
pub fn find_match<'a, S: AsRef<str>>(
    candidate: &str,
    answers: &'a [S],
    tolerance: usize,
) -> Option<&'a str> {
    answers
        .iter()
        .map(AsRef::as_ref)
        .find(|answer| is_match(candidate, answer, tolerance))
}

/// How many of the expected synonyms a set of typed answers covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub covered: usize,
    pub required: usize,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.covered == self.required
    }
}

/// Count the synonyms matched by at least one answer. An answer may cover
/// several synonyms.
pub fn coverage<A: AsRef<str>, S: AsRef<str>>(
    answers: &[A],
    synonyms: &[S],
    tolerance: usize,
) -> Coverage {
    let covered = synonyms
        .iter()
        .filter(|synonym| find_match(synonym.as_ref(), answers, tolerance).is_some())
        .count();

    Coverage {
        covered,
        required: synonyms.len(),
    }
}
