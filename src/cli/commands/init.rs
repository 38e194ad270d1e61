use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        Config::init(path, *force)?;
        info("Edit sheet_file, holidays_file and the column mapping before the first backfill.");
    }
    Ok(())
}
