use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The Monkey programming language, builtin functions included.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(name = "monkey", bin_name = "monkey")]
pub struct Cli {
    /// Starts the REPL when no subcommand is given.
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(flatten)]
    pub repl: ReplArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluates a Monkey program from a string or a file.
    Run(RunArgs),
    /// Starts an interactive session.
    Repl,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Monkey source to evaluate.
    #[clap(short, long, value_name = "MONKEY_CODE", conflicts_with = "file")]
    pub expr: Option<String>,

    /// Path to a Monkey file to execute.
    #[clap(value_name = "FILE_PATH", conflicts_with = "expr", required_unless_present = "expr")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Where to keep line history. Defaults to the user data directory.
    #[clap(long, value_name = "PATH", env = "MONKEY_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Do not load or save line history. Takes precedence over `--history-file`.
    #[clap(long)]
    pub no_history: bool,
}
