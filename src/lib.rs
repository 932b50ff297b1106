//! Discovery and merge of the dev config sources.
//!
//! The core lives in [`config`]: locating `dev-config.toml` with its KeePass
//! companions, reading both, and merging them into a [`config::MergedConfig`].
//! The [`cli`], [`render`] and [`clipboard`] modules are the presentation layer.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use config::{read_config, select_one, Locator, MergedConfig};
pub use domain::{ConfigEntry, FileLocations, Source};
pub use error::{ConfigError, SelectError};
