//! File-backed tracing setup. The terminal belongs to the UI, so log lines go
//! to a file in the platform data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Log file name inside the application data directory.
const LOG_FILE_NAME: &str = "clipboard-boards.log";
/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber and return the log file path. Returns `None`
/// when no data directory exists or the file cannot be opened; the app then
/// runs without logs.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}

/// Resolve the log file location inside the user's local data directory.
fn log_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "clipboard-boards")?;
    Some(dirs.data_local_dir().join(LOG_FILE_NAME))
}
