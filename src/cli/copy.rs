//! Copy command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use super::utils::load;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{select_one, Locator, MergedConfig};
use crate::error::SelectError;
use crate::render::{render_copied, render_entry, Settings};

#[derive(Args)]
pub struct CopyArgs {
    /// Key to copy (exact key, or text matching exactly one key)
    #[arg(value_name = "KEY")]
    pub key: String,
}

pub fn run(args: CopyArgs, locator: &Locator, settings: &Settings) -> Result<()> {
    let config = load(locator)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    copy_value(&config, &args.key, settings, &mut SystemClipboard, &mut out)
}

fn copy_value(
    config: &MergedConfig,
    key: &str,
    settings: &Settings,
    clipboard: &mut dyn Clipboard,
    out: &mut impl Write,
) -> Result<()> {
    let entry = match select_one(config, key) {
        Ok(entry) => entry,
        Err(err @ SelectError::Ambiguous { .. }) => {
            for candidate in config.matching(key) {
                writeln!(out, "  {}", render_entry(&candidate, settings))?;
            }
            writeln!(out)?;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    clipboard.set_text(&entry.value)?;
    tracing::debug!("Copied '{}' to clipboard", entry.key);
    writeln!(out, "{}", render_copied(&entry, settings))?;
    Ok(())
}
