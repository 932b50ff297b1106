//! List command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use super::utils::load;
use crate::config::{Locator, MergedConfig};
use crate::render::{render_entry, Settings};

#[derive(Args)]
pub struct ListArgs {
    /// Only show keys containing this text
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,
}

pub fn run(args: ListArgs, locator: &Locator, settings: &Settings) -> Result<()> {
    let config = load(locator)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_matching(&config, args.pattern.as_deref().unwrap_or(""), settings, &mut out)
}

fn write_matching(
    config: &MergedConfig,
    pattern: &str,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    for entry in config.matching(pattern) {
        writeln!(out, "{}", render_entry(&entry, settings))?;
    }
    Ok(())
}
