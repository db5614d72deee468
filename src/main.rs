use anyhow::{Context, Result, bail};
use clap::Parser;
use monkey_builtins::cli::{Cli, Commands, RunArgs};
use monkey_builtins::engine::env::Environment;
use monkey_builtins::engine::object::Object;
use monkey_builtins::{evaluate_source, logging, repl};
use std::fs;
use std::io::{self, Write};
use tracing::info;

#[tracing::instrument(skip(args))]
fn run(args: RunArgs) -> Result<()> {
    let source = match (args.expr, args.file) {
        (Some(expr), _) => expr,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("either --expr or a file path is required"),
    };

    let mut env = Environment::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = evaluate_source(&source, &mut env, &mut out)?;
    match result {
        Some(Object::Error(message)) => {
            out.flush()?;
            bail!("ERROR: {}", message);
        }
        Some(Object::Null) | None => {}
        Some(value) => writeln!(out, "{}", value)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init_logging();
    info!("Starting Monkey interpreter");

    let cli = Cli::parse();
    info!(?cli, "Parsed CLI arguments");

    match cli.command {
        Some(Commands::Run(args)) => run(args)?,
        Some(Commands::Repl) | None => repl::start_repl(&cli.repl)?,
    }

    info!("Monkey interpreter finished");
    Ok(())
}
