//! System clipboard access.

use anyhow::{Context, Result};

use crate::traits::ClipboardSink;

/// Clipboard backed by the operating system.
///
/// The underlying handle is opened on first use and kept for the lifetime of
/// the value: on X11 the clipboard contents are served by the owning process,
/// so dropping the handle right after a copy can lose the copied text.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new().context("Failed to open the system clipboard")?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .context("System clipboard handle is unavailable")
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let handle = self.handle()?;
        if let Err(err) = handle.set_text(text.to_string()) {
            // A broken handle is reopened on the next attempt.
            self.handle = None;
            return Err(err).context("Failed to write to the system clipboard");
        }
        Ok(())
    }
}

/// Clipboard that records every write instead of touching the system.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
