//! Domain models for the clipboard boards. A board is just a numbered page of
//! text snippets; these types keep the numbering rules and the list edits in
//! one place so the UI and the store never have to re-implement them.

use std::fmt;

/// Number of a board (page). Board numbers start at 1 and are clamped there:
/// any arithmetic that would go lower lands on the first board instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardId(i64);

impl BoardId {
    /// The board shown on startup.
    pub const FIRST: BoardId = BoardId(1);

    /// Build a board id from a raw number, clamping anything below 1.
    pub fn new(raw: i64) -> Self {
        Self(raw.max(Self::FIRST.0))
    }

    /// Raw value as stored in the `board_id` column.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Move by `delta` boards. Going below the first board clamps to it.
    pub fn offset(self, delta: i64) -> Self {
        Self::new(self.0.saturating_add(delta))
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory contents of the board currently on screen. The order of `notes`
/// is the display order and the order in which they are saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    notes: Vec<String>,
}

impl Board {
    pub fn new(id: BoardId, notes: Vec<String>) -> Self {
        Self { id, notes }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(String::as_str)
    }

    /// Append a note after trimming surrounding whitespace. Blank input is
    /// ignored; otherwise the index of the new note is returned.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.notes.push(trimmed.to_string());
        Some(self.notes.len() - 1)
    }

    /// Remove the note at `index`, shifting later notes down. Out of range
    /// indices leave the board untouched.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }
}
