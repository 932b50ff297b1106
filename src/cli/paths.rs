//! Paths command implementation

use anyhow::{Context, Result};

use crate::config::Locator;

pub fn run(locator: &Locator) -> Result<()> {
    let locations = locator.locate().context("failed to locate config files")?;
    println!("Config:   {}", locations.primary_config_path.display());
    println!("Database: {}", locations.secret_store_path.display());
    println!("Password: {}", locations.secret_store_password_path.display());
    Ok(())
}
