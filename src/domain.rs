//! Core data types shared across the crate

use std::path::PathBuf;

/// File name of the primary (plain TOML) config.
pub const PRIMARY_CONFIG_FILE_NAME: &str = "dev-config.toml";
/// File name of the KeePass database that must sit next to the primary config.
pub const SECRET_STORE_FILE_NAME: &str = "dev-config.kdbx";
/// File name of the password file that unlocks the KeePass database.
pub const SECRET_STORE_PASSWORD_FILE_NAME: &str = ".password-dev";

/// Which source a merged entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// `dev-config.toml`
    PrimaryText,
    /// `dev-config.kdbx`
    SecretStore,
}

/// A single key/value pair produced by [`crate::MergedConfig::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: Source,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: Source) -> Self {
        Self { key: key.into(), value: value.into(), source }
    }

    /// Values from the secret store are masked whenever they are displayed.
    pub fn is_secret(&self) -> bool {
        self.source == Source::SecretStore
    }
}

/// Resolved, existing paths of the three files the read pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocations {
    pub primary_config_path: PathBuf,
    pub secret_store_path: PathBuf,
    pub secret_store_password_path: PathBuf,
}
