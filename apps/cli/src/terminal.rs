//! Terminal console: stdin/stdout with colours and Ctrl+C handling.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use vocab_core::{CancelToken, Console, Tone};

/// Input events, from either the stdin reader or the interrupt listener.
#[derive(Debug)]
enum Event {
    Line(String),
    Closed,
    Interrupt,
}

/// Console backed by the process terminal.
///
/// Reads happen on a helper thread so a blocking prompt can be abandoned
/// the moment Ctrl+C arrives.
pub struct TerminalConsole {
    events: Receiver<Event>,
    cancel: CancelToken,
    colored: bool,
}

impl TerminalConsole {
    /// Start the stdin reader and the Ctrl+C listener.
    pub fn spawn(cancel: CancelToken) -> Result<Self> {
        let (tx, rx) = channel();

        spawn_stdin_reader(tx.clone())?;
        spawn_interrupt_listener(cancel.clone(), tx)?;

        Ok(Self {
            events: rx,
            cancel,
            colored: io::stdout().is_tty(),
        })
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.cancel.is_cancelled() {
            return None;
        }

        print!("{prompt}");
        io::stdout().flush().ok();

        match self.events.recv() {
            Ok(Event::Line(line)) => Some(line),
            Ok(Event::Interrupt) => {
                if self.colored {
                    // overwrite the echoed ^C
                    println!("\u{8}\u{8}  ");
                }
                None
            }
            Ok(Event::Closed) | Err(_) => {
                println!();
                self.cancel.cancel();
                None
            }
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.colored {
            return text.to_string();
        }
        match tone {
            Tone::Highlight => text.yellow().to_string(),
            Tone::Banner => text.dark_magenta().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Failure => text.red().to_string(),
        }
    }
}

fn spawn_stdin_reader(events: Sender<Event>) -> Result<()> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if events.send(Event::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read from stdin");
                        break;
                    }
                }
            }
            tracing::debug!("stdin closed");
            events.send(Event::Closed).ok();
        })
        .context("failed to spawn stdin reader")?;
    Ok(())
}

fn spawn_interrupt_listener(cancel: CancelToken, events: Sender<Event>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;

    // the handler is installed here, before the first prompt is shown
    let mut interrupts = {
        let _guard = runtime.enter();
        listen_for_interrupts().context("failed to listen for Ctrl+C")?
    };

    thread::Builder::new()
        .name("interrupt".into())
        .spawn(move || {
            runtime.block_on(async {
                if interrupts.recv().await.is_some() {
                    tracing::debug!("Interrupt received");
                    cancel.cancel();
                    events.send(Event::Interrupt).ok();
                }
            });
        })
        .context("failed to spawn interrupt listener")?;
    Ok(())
}

#[cfg(unix)]
fn listen_for_interrupts() -> io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupts() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
