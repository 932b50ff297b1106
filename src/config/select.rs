//! Picking the single entry a `copy` refers to

use crate::config::MergedConfig;
use crate::domain::ConfigEntry;
use crate::error::SelectError;

/// Resolve `key` to exactly one entry.
///
/// An exact key match wins outright; otherwise `key` must be a substring of
/// exactly one merged key.
pub fn select_one(config: &MergedConfig, key: &str) -> Result<ConfigEntry, SelectError> {
    let mut matches: Vec<ConfigEntry> = Vec::new();
    for entry in config.matching(key) {
        if entry.key == key {
            return Ok(entry);
        }
        matches.push(entry);
    }

    match matches.len() {
        0 => Err(SelectError::NoMatch { key: key.to_string() }),
        1 => Ok(matches.remove(0)),
        _ => Err(SelectError::Ambiguous {
            key: key.to_string(),
            matches: matches.into_iter().map(|entry| entry.key).collect(),
        }),
    }
}
