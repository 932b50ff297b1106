//! Merged view over both config sources

use crate::domain::{ConfigEntry, Source};
use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::Peekable;

/// Values read from `dev-config.toml` and `dev-config.kdbx`.
///
/// When a key exists in both, the primary (TOML) value is the only one
/// visible; the secret-store value for that key is never surfaced.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    primary_values: BTreeMap<String, String>,
    secret_values: BTreeMap<String, String>,
}

impl MergedConfig {
    pub fn new(
        primary_values: BTreeMap<String, String>,
        secret_values: BTreeMap<String, String>,
    ) -> Self {
        for key in primary_values.keys().filter(|k| secret_values.contains_key(*k)) {
            tracing::debug!("Key '{}' is shadowed by the primary config", key);
        }
        Self { primary_values, secret_values }
    }

    /// All entries, sorted by key, one per distinct key.
    ///
    /// Each call starts a fresh pass over the same data.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            primary: self.primary_values.iter().peekable(),
            secret: self.secret_values.iter().peekable(),
        }
    }

    /// Entries whose key contains `pattern`. An empty pattern matches all.
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = ConfigEntry> + 'a {
        self.entries().filter(move |entry| entry.key.contains(pattern))
    }

    /// Number of distinct keys across both sources.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.primary_values.is_empty() && self.secret_values.is_empty()
    }
}

/// Lazy sorted merge of the two key spaces.
///
/// Both maps are already ordered, so this walks them in lockstep rather than
/// collecting and sorting the key union.
pub struct Entries<'a> {
    primary: Peekable<btree_map::Iter<'a, String, String>>,
    secret: Peekable<btree_map::Iter<'a, String, String>>,
}

impl Iterator for Entries<'_> {
    type Item = ConfigEntry;

    fn next(&mut self) -> Option<ConfigEntry> {
        let order = match (self.primary.peek(), self.secret.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((pk, _)), Some((sk, _))) => pk.cmp(sk),
        };
        if order == Ordering::Equal {
            // Shadowed secret value.
            self.secret.next();
        }

        if order != Ordering::Greater {
            let (key, value) = self.primary.next()?;
            Some(ConfigEntry::new(key.as_str(), value.as_str(), Source::PrimaryText))
        } else {
            let (key, value) = self.secret.next()?;
            Some(ConfigEntry::new(key.as_str(), value.as_str(), Source::SecretStore))
        }
    }
}
