use crate::cli::ReplArgs;
use crate::repl::highlighter::ReplHelper;
use rustyline::Editor;
use rustyline::history::DefaultHistory;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

const HISTORY_FILE_NAME: &str = "history.txt";

pub(crate) fn get_history_path() -> Option<PathBuf> {
    let crate_name = env!("CARGO_PKG_NAME");
    dirs::data_dir().or_else(dirs::config_dir).map(|mut path| {
        path.push(crate_name);
        path.push(HISTORY_FILE_NAME);
        path
    })
}

/// Picks the history file for a session. `--no-history` wins over an explicit
/// path, whether that path came from the flag or from `MONKEY_HISTORY_FILE`.
pub(crate) fn resolve_history_path(args: &ReplArgs) -> Option<PathBuf> {
    if args.no_history {
        debug!("History disabled by --no-history");
        return None;
    }
    args.history_file.clone().or_else(get_history_path)
}

pub(crate) fn load_history_from_path(
    rl: &mut Editor<ReplHelper, DefaultHistory>,
    history_path: &Path,
) {
    if let Some(parent_dir) = history_path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                warn!(
                    "Failed to create history directory {}: {}",
                    parent_dir.display(),
                    e
                );
            }
        }
    }
    if history_path.exists() {
        if let Err(err) = rl.load_history(history_path) {
            warn!(
                "Could not load history from {}: {}",
                history_path.display(),
                err
            );
        } else {
            info!("Loaded history from {}", history_path.display());
        }
    } else {
        info!(
            "History file {} does not exist. Will create on exit.",
            history_path.display()
        );
    }
}

pub(crate) fn save_history_to_path(
    rl: &mut Editor<ReplHelper, DefaultHistory>,
    history_path: &Path,
) {
    if let Err(err) = rl.save_history(history_path) {
        error!(
            "Could not save history to {}: {}",
            history_path.display(),
            err
        );
    } else {
        info!("Saved history to {}", history_path.display());
    }
}
