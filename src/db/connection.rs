use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

/// SQLite file name, opened relative to the current working directory.
pub const DB_FILE_NAME: &str = "clipboard_boards.db";

/// Owner of the single SQLite connection. The UI holds exactly one of these
/// and calls it sequentially from the event loop.
pub struct Store {
    pub(super) conn: Connection,
}

impl Store {
    /// Open (or create) `clipboard_boards.db` in the working directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DB_FILE_NAME)
    }

    /// Open (or create) the database at `path` and make sure the table
    /// exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open SQLite database at {}", path.display()))?;
        debug!(path = %path.display(), "opened clipboard store");
        Self::from_connection(conn)
    }

    /// Throwaway store backed by an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the `clipboard` table when it is missing. Running it against an
    /// existing database changes nothing, so databases written by earlier
    /// versions with the same two columns keep working.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS clipboard (board_id INTEGER, item TEXT)",
                [],
            )
            .context("failed to create clipboard table")?;
        Ok(())
    }

    /// Release the connection. Consuming `self` means nothing can use the
    /// store afterwards.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| err)
            .context("failed to close SQLite database")?;
        debug!("closed clipboard store");
        Ok(())
    }
}
