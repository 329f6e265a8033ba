use std::{fs, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use scalc::repl::{self, Outcome, Repl};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// scalc is a small scientific calculator with variables, implicit
/// multiplication and square roots.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scalc to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the expression tree of each line before its value.
    #[arg(short, long)]
    tree: bool,

    /// The expression to evaluate, or the file to read with `--file`.
    /// Starts an interactive session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    // Respects RUST_LOG, quiet by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.contents {
        None => {
            run_interactive(args.tree)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).with_context(|| {
                             format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                         })?;
            Ok(run_script(&script, args.tree))
        },
        Some(expression) => Ok(run_script(&expression, args.tree)),
    }
}

/// Evaluates every line of `script` in one session. Errors are reported and
/// evaluation continues with the next line.
fn run_script(script: &str, tree: bool) -> ExitCode {
    let mut repl = Repl::new();
    let mut status = ExitCode::SUCCESS;

    for (number, line) in script.lines().enumerate() {
        match handle_line(&mut repl, line, tree) {
            Ok(true) => {},
            Ok(false) => break,
            Err(e) => {
                eprintln!("Error on line {}: {e}", number + 1);
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}

fn run_interactive(tree: bool) -> Result<()> {
    println!("{}", repl::WELCOME);

    let mut editor = DefaultEditor::new().context("Failed to create line editor")?;
    let mut repl = Repl::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {e}");
                }
                match handle_line(&mut repl, &line, tree) {
                    Ok(true) => {},
                    Ok(false) => break,
                    Err(e) => println!("Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Processes one line and prints what it produced. Returns `false` once the
/// session should end.
fn handle_line(repl: &mut Repl, line: &str, tree: bool) -> Result<bool, scalc::Error> {
    let outcome = repl.process_line(line);

    if tree && !matches!(outcome, Ok(Outcome::Empty | Outcome::Help | Outcome::Exit)) {
        print_tree(line);
    }

    match outcome? {
        Outcome::Exit => return Ok(false),
        Outcome::Value(value) => println!("{value}"),
        Outcome::Help => println!("{}", repl::HELP),
        Outcome::Assigned { name, value } => tracing::debug!(name = %name, value, "assigned"),
        Outcome::Empty => {},
    }

    Ok(true)
}

fn print_tree(line: &str) {
    if let Ok(trees) = repl::visualize_line(line) {
        for tree in trees {
            println!("{tree}");
        }
    }
}
