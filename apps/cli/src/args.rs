//! Command line arguments for the drill.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use vocab_core::{QuizMode, QuizSettings, DEFAULT_CHOICES, DEFAULT_TOLERANCE};

/// Choose game and word bunches.
#[derive(Parser, Debug, Clone)]
#[command(name = "vocab-drill")]
#[command(about = "Drill synonyms from essential-words bunches. Press Ctrl+C to stop.")]
#[command(version)]
pub struct DrillArgs {
    /// Choose `essential-words-{bunch}.txt` files to incorporate. Include -1 for last.
    /// Default: all
    #[arg(value_name = "BUNCH", allow_negative_numbers = true)]
    pub bunches: Vec<i64>,

    /// Type of game
    #[arg(long = "type", value_enum, default_value_t = GameType::FillAll, env = "VOCAB_TYPE")]
    pub game: GameType,

    /// Edit distance to be forgiven
    #[arg(long = "edit", default_value_t = DEFAULT_TOLERANCE, env = "VOCAB_EDIT")]
    pub edit_distance: usize,

    /// Include arbitrarily named files, relative to the words directory
    #[arg(long = "extra", value_name = "FILE", num_args = 1..)]
    pub extra: Vec<PathBuf>,

    /// Exclude all `essential-words-#.txt` files
    #[arg(long = "dis", action = ArgAction::SetTrue)]
    pub exclude_numbered: bool,

    /// Mix primary word and synonyms (choice game)
    #[arg(long, action = ArgAction::SetTrue)]
    pub mix: bool,

    /// Number of choices shown in the choice game
    #[arg(long, default_value_t = DEFAULT_CHOICES as u16, value_parser = clap::value_parser!(u16).range(2..))]
    pub choices: u16,

    /// Directory holding the word bunches
    #[arg(long = "dir", value_name = "DIR", default_value = "essential-words", env = "VOCAB_WORDS_DIR")]
    pub words_dir: PathBuf,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Game types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameType {
    Choice,
    Fill,
    #[value(name = "fill_all")]
    FillAll,
}

impl From<GameType> for QuizMode {
    fn from(game: GameType) -> Self {
        match game {
            GameType::Choice => Self::Choice,
            GameType::Fill => Self::Fill,
            GameType::FillAll => Self::FillAll,
        }
    }
}

impl DrillArgs {
    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            mode: self.game.into(),
            edit_distance_tolerance: self.edit_distance,
            mix: self.mix,
            choices: usize::from(self.choices),
        }
    }

    /// Default log filter when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> DrillArgs {
        DrillArgs::try_parse_from(std::iter::once("vocab-drill").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert!(args.bunches.is_empty());
        assert_eq!(args.game, GameType::FillAll);
        assert_eq!(args.words_dir, PathBuf::from("essential-words"));
        assert_eq!(args.settings(), QuizSettings::default());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn bunches_accept_minus_one() {
        let args = parse(&["1", "3", "-1"]);
        assert_eq!(args.bunches, vec![1, 3, -1]);
    }

    #[test]
    fn game_options_map_to_settings() {
        let args = parse(&["--type", "choice", "--edit", "0", "--mix", "--choices", "4"]);
        let settings = args.settings();
        assert_eq!(settings.mode, QuizMode::Choice);
        assert_eq!(settings.edit_distance_tolerance, 0);
        assert!(settings.mix);
        assert_eq!(settings.choices, 4);
    }

    #[test]
    fn fill_all_uses_underscore() {
        assert_eq!(parse(&["--type", "fill_all"]).game, GameType::FillAll);
        assert!(DrillArgs::try_parse_from(["vocab-drill", "--type", "fill-all"]).is_err());
    }

    #[test]
    fn extra_files_and_exclusion() {
        let args = parse(&["--dis", "--extra", "mine.txt", "theirs.txt"]);
        assert!(args.exclude_numbered);
        assert_eq!(
            args.extra,
            vec![PathBuf::from("mine.txt"), PathBuf::from("theirs.txt")]
        );
    }

    #[test]
    fn reject_single_choice() {
        assert!(DrillArgs::try_parse_from(["vocab-drill", "--choices", "1"]).is_err());
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(parse(&["-v"]).log_level(), "info");
        assert_eq!(parse(&["-vvv"]).log_level(), "debug");
    }
}
