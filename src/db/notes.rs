use anyhow::{Context, Result};
use rusqlite::params;
use tracing::debug;

use super::connection::Store;
use crate::models::BoardId;

impl Store {
    /// Every note saved for `board`, in the order the last save inserted
    /// them. `rowid` grows with each insert, so it doubles as the position.
    pub fn load(&self, board: BoardId) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT item FROM clipboard WHERE board_id = ?1 ORDER BY rowid")
            .context("failed to prepare note query")?;

        let notes = stmt
            .query_map([board.get()], |row| row.get(0))
            .context("failed to load notes")?
            .collect::<Result<Vec<String>, _>>()
            .context("failed to collect notes")?;

        debug!(board = board.get(), count = notes.len(), "loaded board");
        Ok(notes)
    }

    /// Overwrite everything stored for `board` with `notes`. The delete and
    /// the inserts share one transaction, so a failure halfway keeps the
    /// previously saved notes.
    pub fn replace(&mut self, board: BoardId, notes: &[String]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .context("failed to start save transaction")?;

        tx.execute(
            "DELETE FROM clipboard WHERE board_id = ?1",
            params![board.get()],
        )
        .context("failed to clear board")?;

        {
            let mut insert = tx
                .prepare("INSERT INTO clipboard (board_id, item) VALUES (?1, ?2)")
                .context("failed to prepare note insert")?;
            for note in notes {
                insert
                    .execute(params![board.get(), note])
                    .context("failed to insert note")?;
            }
        }

        tx.commit().context("failed to commit board")?;
        debug!(board = board.get(), count = notes.len(), "saved board");
        Ok(())
    }

    /// Board numbers that currently hold at least one note, ascending.
    pub fn board_ids(&self) -> Result<Vec<BoardId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT board_id FROM clipboard ORDER BY board_id")
            .context("failed to prepare board query")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))
            .context("failed to load board numbers")?
            .map(|id| id.map(BoardId::new))
            .collect::<Result<Vec<_>, _>>()
            .context("failed to collect board numbers")?;

        Ok(ids)
    }
}
