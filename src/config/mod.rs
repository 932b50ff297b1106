//! Config discovery, reading, and merging
//!
//! The read pipeline runs strictly in order: locate the three files, read the
//! TOML config, decrypt the KeePass database, then merge. The first failure
//! aborts the whole read.

pub mod locate;
pub mod merge;
pub mod primary;
pub mod secret_store;
pub mod select;

pub use locate::Locator;
pub use merge::{Entries, MergedConfig};
pub use primary::read_primary;
pub use secret_store::read_secret_store;
pub use select::select_one;

use crate::error::ConfigError;

/// Locate, read, and merge both config sources.
pub fn read_config(locator: &Locator) -> Result<MergedConfig, ConfigError> {
    let locations = locator.locate()?;
    tracing::debug!("Using config {}", locations.primary_config_path.display());

    let primary_values = read_primary(&locations.primary_config_path)?;
    tracing::debug!("Read {} values from primary config", primary_values.len());

    let secret_values =
        read_secret_store(&locations.secret_store_path, &locations.secret_store_password_path)?;
    tracing::debug!("Read {} entries from secret store", secret_values.len());

    Ok(MergedConfig::new(primary_values, secret_values))
}
