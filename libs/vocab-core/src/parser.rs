//! Parser for word-bunch files.
//!
//! # Format
//! ```text
//! abundant=plentiful in quantity=ample,copious,profuse
//! candid=frank and open=blunt,forthright
//! ```
//!
//! Fields are separated by `=`, synonyms by `,`. Anything after a third `=`
//! is ignored.

use crate::error::ParseError;
use crate::types::WordRecord;

/// Parse word-bunch content into records, skipping blank lines.
pub fn parse(content: &str) -> Result<Vec<WordRecord>, ParseError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_number: usize) -> Result<WordRecord, ParseError> {
    let line = line.trim_end_matches('\r');
    let mut fields = line.split('=');

    let word = next_field(&mut fields, line_number, "word")?;
    let translation = next_field(&mut fields, line_number, "translation")?;
    let synonyms = fields
        .next()
        .ok_or(ParseError::MissingField {
            line: line_number,
            field: "synonyms",
        })?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();

    if synonyms.is_empty() {
        return Err(ParseError::EmptySynonyms { line: line_number });
    }

    Ok(WordRecord {
        word,
        translation,
        synonyms,
        line_number,
    })
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    field: &'static str,
) -> Result<String, ParseError> {
    match fields.next().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ParseError::MissingField { line, field }),
    }
}
