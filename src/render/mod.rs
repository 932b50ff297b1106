//! Terminal rendering of merged entries

pub mod mask;

pub use mask::{mask_secret, truncate};

use crate::domain::ConfigEntry;
use console::Style;

/// Default visible width for a rendered value.
pub const DEFAULT_WIDTH: usize = 50;

/// Presentation settings, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of characters of a value to show.
    pub width: usize,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, color: false }
    }
}

impl Settings {
    fn key_style(&self) -> Style {
        Style::new().green().force_styling(self.color)
    }

    fn value_style(&self) -> Style {
        Style::new().dim().force_styling(self.color)
    }
}

/// Display form of an entry's value: masked for secrets, truncated otherwise.
pub fn display_value(entry: &ConfigEntry, width: usize) -> String {
    if entry.is_secret() {
        mask_secret(&entry.value, width)
    } else {
        truncate(&entry.value, width)
    }
}

/// `key = value` with styling applied.
pub fn render_entry(entry: &ConfigEntry, settings: &Settings) -> String {
    format!(
        "{} = {}",
        settings.key_style().apply_to(&entry.key),
        settings.value_style().apply_to(display_value(entry, settings.width))
    )
}

/// `Key <key> (<value>) copied to clipboard`
pub fn render_copied(entry: &ConfigEntry, settings: &Settings) -> String {
    format!(
        "Key {} ({}) copied to clipboard",
        settings.key_style().apply_to(&entry.key),
        settings.value_style().apply_to(display_value(entry, settings.width))
    )
}
