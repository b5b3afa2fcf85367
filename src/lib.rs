//! Core library surface for the clipboard boards TUI: numbered pages of text
//! snippets, persisted in SQLite and copied to the system clipboard on click.
pub mod clipboard;
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;

/// The SQLite-backed note store.
pub use db::{Store, DB_FILE_NAME};

/// Board numbering and the in-memory note list.
pub use models::{Board, BoardId};

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use logging::init_logging;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
