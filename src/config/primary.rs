//! `dev-config.toml` reader

use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Read the TOML config and flatten its leaves into dotted keys.
pub fn read_primary(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_primary(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Parse TOML text into `a.b.c -> value` pairs.
///
/// Tables are structure only; arrays (including arrays of tables) are leaves.
pub fn parse_primary(content: &str) -> Result<BTreeMap<String, String>, toml::de::Error> {
    let table: Table = toml::from_str(content)?;
    let mut values = BTreeMap::new();
    flatten_table(&table, None, &mut values);
    Ok(values)
}

fn flatten_table(table: &Table, prefix: Option<&str>, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Table(inner) => flatten_table(inner, Some(&path), out),
            leaf => {
                out.insert(path, render_leaf(leaf));
            }
        }
    }
}

fn render_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(dt) => dt.to_string(),
        // Inline TOML syntax, e.g. `["a", "b"]`
        other => other.to_string(),
    }
}
