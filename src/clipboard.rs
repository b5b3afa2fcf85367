//! Thin seam over the platform clipboard. The UI only ever needs to put text
//! on the clipboard, so the trait has a single method and the tests can swap
//! in an in-memory sink without a display server.

use std::cell::RefCell;
use std::rc::Rc;

use clipboard_rs::{Clipboard, ClipboardContext};
use thiserror::Error;

/// Failures reported while writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be reached (e.g. no X11/Wayland session).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard was reachable but refused the text.
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Anything that can receive copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard via `clipboard-rs`. The context is created
/// on first use so the board still starts on machines without a clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    fn context(&mut self) -> Result<&ClipboardContext, ClipboardError> {
        if self.context.is_none() {
            let context = ClipboardContext::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            self.context = Some(context);
        }
        self.context
            .as_ref()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard context missing".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.context()?
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Clipboard that records every copy in memory. Clones share the same
/// history, so a caller can keep one handle and box the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    /// Most recently copied text.
    pub fn contents(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    /// Every copy so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }
}
