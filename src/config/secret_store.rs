//! `dev-config.kdbx` reader
//!
//! The password file's raw contents (no trimming) are the database password.
//! Protected fields are unlocked in memory by `keepass` while the database is
//! opened; only titles and passwords are kept afterwards.

use crate::error::ConfigError;
use keepass::db::{Entry, Group, Node};
use keepass::{Database, DatabaseKey};
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Decrypt the KeePass database and map every entry title to its password.
///
/// Entries are visited depth-first in stored order; when a title appears more
/// than once the last visited entry wins.
pub fn read_secret_store(
    db_path: &Path,
    password_path: &Path,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let password = read_password(password_path)?;
    let db = open_database(db_path, &password)?;

    let mut values = BTreeMap::new();
    flatten_group(&db.root, &mut values);
    Ok(values)
}

fn read_password(path: &Path) -> Result<SecretString, ConfigError> {
    let bytes =
        fs::read(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let password = String::from_utf8(bytes)
        .map_err(|_| ConfigError::InvalidPassword { path: path.to_path_buf() })?;
    Ok(SecretString::from(password))
}

fn open_database(path: &Path, password: &SecretString) -> Result<Database, ConfigError> {
    let file =
        File::open(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let mut reader = BufReader::new(file);
    let key = DatabaseKey::new().with_password(password.expose_secret());
    Database::open(&mut reader, key)
        .map_err(|source| ConfigError::Decryption { path: path.to_path_buf(), source })
}

fn flatten_group(group: &Group, out: &mut BTreeMap<String, String>) {
    for node in &group.children {
        match node {
            Node::Entry(entry) => insert_entry(entry, &group.name, out),
            Node::Group(child) => flatten_group(child, out),
        }
    }
}

fn insert_entry(entry: &Entry, group_name: &str, out: &mut BTreeMap<String, String>) {
    let Some(title) = entry.get_title() else {
        tracing::debug!("Skipping untitled entry in group '{}'", group_name);
        return;
    };
    let secret = entry.get_password().unwrap_or_default().to_string();
    if out.insert(title.to_string(), secret).is_some() {
        tracing::debug!("Entry '{}' in group '{}' overrides an earlier entry", title, group_name);
    }
}
