//! TableKeep console — interactive and scriptable CLI over an embedded
//! catalog backed by the in-memory store. The catalog lives for the
//! duration of the process.

use std::io::{BufRead, IsTerminal};
use std::process;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tablekeep_core::catalog::Catalog;
use tablekeep_core::store::MemoryStore;

mod commands;
mod display;
mod executor;
mod parser;

use display::OutputMode;

/// TableKeep Console — manage table schemas interactively or from scripts.
#[derive(Parser, Debug)]
#[command(name = "tablekeep-console", version)]
struct Cli {
    /// Execute a command non-interactively (can be repeated).
    #[arg(short, long = "exec")]
    exec: Vec<String>,

    /// Output results as machine-parseable JSON.
    #[arg(short, long)]
    json: bool,

    /// Schema write batch size (records per transaction).
    #[arg(long)]
    batch_size: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = MemoryStore::new();
    let catalog = match cli.batch_size {
        Some(batch_size) => Catalog::with_batch_size(store, batch_size),
        None => Catalog::new(store),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to open catalog: {e}");
            process::exit(1);
        }
    };

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Pretty
    };

    if !cli.exec.is_empty() {
        process::exit(run_lines(&catalog, cli.exec.iter().map(String::as_str), &mode));
    } else if !std::io::stdin().is_terminal() {
        process::exit(run_pipe_mode(&catalog, &mode));
    } else {
        run_repl(&catalog);
    }
}

/// Run a fixed sequence of command lines; returns a process exit code.
fn run_lines<'a>(
    catalog: &Catalog<MemoryStore>,
    lines: impl Iterator<Item = &'a str>,
    mode: &OutputMode,
) -> i32 {
    for line in lines {
        match run_line(catalog, line, mode) {
            Ok(true) => {}
            Ok(false) => return 0,
            Err(()) => return 1,
        }
    }
    0
}

/// Read command lines from stdin until EOF.
fn run_pipe_mode(catalog: &Catalog<MemoryStore>, mode: &OutputMode) -> i32 {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                return 1;
            }
        };
        match run_line(catalog, &line, mode) {
            Ok(true) => {}
            Ok(false) => return 0,
            Err(()) => return 1,
        }
    }
    0
}

/// Interactive loop with history.
fn run_repl(catalog: &Catalog<MemoryStore>) {
    println!("TableKeep console (type HELP for commands, EXIT to leave)");

    let mut editor = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("failed to initialize line editor: {e}");
            process::exit(1);
        }
    };

    loop {
        match editor.readline("tablekeep> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                // In the REPL, command errors are printed and the loop
                // continues.
                if let Ok(false) = run_line(catalog, &line, &OutputMode::Pretty) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }
}

/// Parse, execute, and render one line.
///
/// `Ok(false)` signals exit; `Err(())` means the line failed (parse
/// error or store failure).
fn run_line(catalog: &Catalog<MemoryStore>, line: &str, mode: &OutputMode) -> Result<bool, ()> {
    let cmd = match parser::parse(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Ok(true),
        Err(e) => {
            eprintln!("parse error: {e}");
            return Err(());
        }
    };
    match executor::execute(catalog, cmd) {
        Ok(result) => Ok(display::render(&result, mode)),
        Err(e) => {
            eprintln!("error: {e}");
            Err(())
        }
    }
}
