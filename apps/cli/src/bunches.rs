//! Word-bunch discovery and loading.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use vocab_core::{parse, Lexicon};

use crate::args::DrillArgs;

const BUNCH_FILE_PATTERN: &str = r"^essential-words-(\d+)\.txt$";

pub fn bunch_file(dir: &Path, number: u32) -> PathBuf {
    dir.join(format!("essential-words-{number}.txt"))
}

/// Numbers of the `essential-words-<n>.txt` files in `dir`, ascending.
///
/// A missing directory has no bunches.
pub fn discover(dir: &Path) -> Result<Vec<u32>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "Words directory not found");
        return Ok(Vec::new());
    }

    let pattern = Regex::new(BUNCH_FILE_PATTERN)?;
    let mut bunches = Vec::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(number) = pattern
            .captures(name)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            bunches.push(number);
        }
    }

    bunches.sort_unstable();
    bunches.dedup();
    Ok(bunches)
}

/// Turn requested bunch numbers and extra file names into paths.
///
/// No requested numbers means every available bunch; `-1` is the last one.
pub fn resolve(
    dir: &Path,
    requested: &[i64],
    available: &[u32],
    extra: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if requested.is_empty() {
        files.extend(available.iter().map(|&n| bunch_file(dir, n)));
    }
    for &number in requested {
        let number = match number {
            -1 => match available.last() {
                Some(&last) => last,
                None => bail!("no numbered word bunches in {}", dir.display()),
            },
            n => u32::try_from(n)
                .with_context(|| format!("invalid bunch number {n}, use -1 for the last one"))?,
        };
        files.push(bunch_file(dir, number));
    }

    files.extend(extra.iter().map(|name| dir.join(name)));
    Ok(files)
}

/// Files selected by the command line.
pub fn select_files(args: &DrillArgs) -> Result<Vec<PathBuf>> {
    let dir = &args.words_dir;
    if args.exclude_numbered {
        return resolve(dir, &[], &[], &args.extra);
    }
    let available = discover(dir)?;
    tracing::debug!(?available, "Discovered word bunches");
    resolve(dir, &args.bunches, &available, &args.extra)
}

/// Read and merge word files into one lexicon.
pub fn load_lexicon(files: &[PathBuf]) -> Result<Lexicon> {
    let mut records = Vec::new();

    for path in files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word bunch {}", path.display()))?;
        let parsed =
            parse(&content).with_context(|| format!("invalid word bunch {}", path.display()))?;
        tracing::debug!(file = %path.display(), words = parsed.len(), "Loaded word bunch");
        records.extend(parsed);
    }

    Ok(Lexicon::from_records(records)?)
}
