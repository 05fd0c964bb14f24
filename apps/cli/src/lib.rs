pub mod args;
pub mod bunches;
pub mod terminal;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{CancelToken, Console, Session};

use crate::args::DrillArgs;
use crate::terminal::TerminalConsole;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = DrillArgs::parse();

    // stdout belongs to the quiz, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| args.log_level().into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let files = bunches::select_files(&args)?;
    tracing::info!("Loading {} word files...", files.len());
    let lexicon = bunches::load_lexicon(&files)?;

    let mut session = Session::new(&lexicon, args.settings())?;

    let cancel = CancelToken::new();
    let mut console = TerminalConsole::spawn(cancel.clone())?;
    console.say("Press `Ctrl+C` to exit.");

    let score = session.run(&mut rand::rng(), &mut console, &cancel)?;
    tracing::info!("Final score {}", score);

    Ok(())
}
