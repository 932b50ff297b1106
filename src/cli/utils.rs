//! Shared CLI utilities.

use crate::config::{read_config, Locator, MergedConfig};
use crate::render::Settings;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

/// An explicit `--config` path is the only candidate; otherwise search the
/// default locations.
pub fn build_locator(config: Option<PathBuf>) -> Locator {
    match config {
        Some(path) => Locator::new(vec![path]),
        None => Locator::with_default_candidates(dirs::home_dir().as_deref()),
    }
}

pub fn build_settings(width: usize, color: ColorChoice) -> Settings {
    let color = match color {
        ColorChoice::Auto => console::colors_enabled(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    Settings { width, color }
}

pub fn load(locator: &Locator) -> Result<MergedConfig> {
    read_config(locator).context("failed to read config")
}
