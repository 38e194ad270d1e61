//! rRegister library root.
//! Exposes the CLI parser, the high-level run() function and the core
//! calendar / generator / table modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher.
///
/// The configuration is loaded once here and passed down; `init` is the only
/// command that runs without it.
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, &Config::load(config_path)?)
        }
        Commands::Backfill { .. } => {
            cli::commands::backfill::handle(&cli.command, &Config::load(config_path)?)
        }
        Commands::Dump { .. } => {
            cli::commands::dump::handle(&cli.command, &Config::load(config_path)?)
        }
        Commands::Days { .. } => {
            cli::commands::days::handle(&cli.command, &Config::load(config_path)?)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    dispatch(&cli, &config_path)
}
