//! Command-line interface for badcfg
//!
//! Provides `list`, `copy`, and `paths` subcommands over the merged dev config.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod copy;
mod list;
mod paths;
mod utils;

pub use utils::ColorChoice;

const EXAMPLES: &str = "\
Examples:
  badcfg list                                  # List all keys in the config file
  badcfg list jetprofile.datasource.dev1       # List all keys matching jetprofile.datasource.dev1
  badcfg copy jetprofile.datasource.dev1.host  # Copy the value of jetprofile.datasource.dev1.host
  badcfg copy jetprofile                       # Fails: more than one key matches";

/// A dead simple tool to list and copy dev config values
#[derive(Parser)]
#[command(name = "badcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this dev-config.toml instead of searching the default locations
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum number of characters of a value to display
    #[arg(long, global = true, value_name = "N", default_value_t = crate::render::DEFAULT_WIDTH)]
    width: usize,

    /// When to use terminal colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all keys matching the given pattern
    List(list::ListArgs),

    /// Copy the value matching the given key to the clipboard
    Copy(copy::CopyArgs),

    /// Show where the config files were found
    Paths,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let locator = utils::build_locator(cli.config);
    let settings = utils::build_settings(cli.width, cli.color);

    match command {
        Commands::List(args) => list::run(args, &locator, &settings),
        Commands::Copy(args) => copy::run(args, &locator, &settings),
        Commands::Paths => paths::run(&locator),
    }
}

/// A non-empty, valid `RUST_LOG` wins outright; otherwise `--verbose` picks
/// DEBUG and the default is WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let fallback = || EnvFilter::default().add_directive(level.into());
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| fallback()),
        None => fallback(),
    }
}
