//! Clipboard access
//!
//! `copy` talks to the clipboard through [`Clipboard`] so the command logic can
//! be exercised without an OS clipboard.

use anyhow::{Context, Result};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, backed by `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard.set_text(text.to_string()).context("Failed to write to clipboard")?;
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub contents: Option<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
