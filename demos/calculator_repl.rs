//! Calculator REPL
//!
//! Drives a session from the keyboard. Each line is read as a sequence of
//! key presses: digits, `.`, `+ - x /`, `=`, `c` to clear and `d` to delete.
//! Type `convert` to hand the current display to the currency converter,
//! `history` to print the dispatch log, and `quit` to exit.
//!
//! Run with: cargo run --example calculator_repl -- [config.json]
//! Set RUST_LOG=tally=debug to watch each dispatch.

use std::io::{self, BufRead, Write};
use tally::converter::{ConverterState, Currency};
use tally::{Action, EngineConfig, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let mut session = Session::new(config);

    println!("=== Calculator ===");
    let stdin = io::stdin();
    prompt(&session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" | "exit" => break,
            "convert" => show_conversions(&session.display()),
            "history" => {
                for record in session.history().records() {
                    println!(
                        "  {} {:>4}  {} -> {}  [{}]",
                        record.timestamp.format("%H:%M:%S"),
                        record.action.label(),
                        record.from.name(),
                        record.to.name(),
                        record.display
                    );
                }
            }
            keys => {
                for key in keys.chars().filter(|c| !c.is_whitespace()) {
                    match Action::from_key(key) {
                        Some(action) => {
                            session.dispatch(action);
                        }
                        None => eprintln!("unknown key '{key}'"),
                    }
                }
            }
        }
        prompt(&session)?;
    }

    Ok(())
}

fn prompt(session: &Session) -> io::Result<()> {
    let display = session.display();
    print!("[{}] > ", if display.is_empty() { "0" } else { display.as_str() });
    io::stdout().flush()
}

fn show_conversions(display: &str) {
    let mut converter = ConverterState::seeded(display);
    println!("  {} {}", converter.amount, converter.from);
    let from = converter.from;
    for to in Currency::ALL.into_iter().filter(|c| *c != from) {
        converter.to = to;
        println!("  = {} {}", converter.result(), to);
    }
}
