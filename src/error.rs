//! Error types for the read pipeline and key selection

use std::path::PathBuf;

use thiserror::Error;

/// Failure while locating, reading, or decrypting a config source.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} not found (searched: {})", display_paths(.searched))]
    NotFound { name: &'static str, searched: Vec<PathBuf> },

    #[error("failed reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to decrypt {} (wrong password or corrupt database)", .path.display())]
    Decryption {
        path: PathBuf,
        #[source]
        source: keepass::error::DatabaseOpenError,
    },

    #[error("password file {} is not valid UTF-8", .path.display())]
    InvalidPassword { path: PathBuf },
}

/// Failure to pick exactly one entry for `copy`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no value found for key '{key}'")]
    NoMatch { key: String },

    #[error("more than one value found for key '{key}': {}", .matches.join(", "))]
    Ambiguous { key: String, matches: Vec<String> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
