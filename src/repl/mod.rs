mod highlighter;
mod history;

pub use highlighter::{BuiltinCompleter, MonkeyHighlighter, ReplHelper};

use crate::cli::ReplArgs;
use crate::engine::env::Environment;
use crate::engine::eval::evaluate_source;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::io::{self, Write};
use tracing::{info, warn};

const PROMPT: &str = ">> ";

/// Evaluates one REPL line and writes what the user should see: the value's
/// inspection on `out`, or a parse failure on `err`.
pub fn eval_line(
    line: &str,
    env: &mut Environment,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match evaluate_source(line, env, out) {
        Ok(Some(result)) => writeln!(out, "{}", result),
        Ok(None) => Ok(()), // e.g. a `let` statement
        Err(e) => writeln!(err, "parse error: {}", e),
    }
}

#[tracing::instrument(skip(args))]
pub fn start_repl(args: &ReplArgs) -> anyhow::Result<()> {
    info!("Starting REPL session with rustyline");
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    let history_path_opt = history::resolve_history_path(args);
    match history_path_opt {
        Some(ref history_path) => history::load_history_from_path(&mut rl, history_path),
        None => warn!("History is disabled or has no location. It will not be saved."),
    }

    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let mut env = Environment::new();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed_input = line.trim();
                if trimmed_input.is_empty() {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    warn!("Failed to add line to history: {}", err);
                }
                if trimmed_input == ".exit" {
                    info!("Exiting REPL session via user command.");
                    println!("Exiting.");
                    break;
                }

                let stdout = io::stdout();
                let stderr = io::stderr();
                eval_line(trimmed_input, &mut env, &mut stdout.lock(), &mut stderr.lock())?;
            }
            Err(ReadlineError::Interrupted) => {
                info!("REPL interrupted (Ctrl-C).");
                println!("Interrupted. Type .exit or Ctrl-D to exit.");
            }
            Err(ReadlineError::Eof) => {
                info!("REPL EOF detected (Ctrl-D).");
                println!("Exiting.");
                break;
            }
            Err(err) => {
                eprintln!("REPL Readline Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref history_path) = history_path_opt {
        history::save_history_to_path(&mut rl, history_path);
    }
    Ok(())
}
