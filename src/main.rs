//! badcfg: list and copy values from the merged dev config
//!
//! Reads `dev-config.toml` and its sibling KeePass database, merges them into a
//! single sorted namespace, and exposes `list` / `copy` subcommands.

use anyhow::Result;

fn main() -> Result<()> {
    badcfg::cli::run()
}
