use crate::cli::commands::parse_cli_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backfill::{BackfillLogic, BackfillOptions};
use crate::errors::AppResult;
use crate::sheet::CsvSheet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backfill {
        start,
        end,
        dry_run,
    } = cmd
    {
        let opts = BackfillOptions {
            start: parse_cli_date("start", start)?,
            end: parse_cli_date("end", end)?,
            dry_run: *dry_run,
        };

        let mut sheet = CsvSheet::open(cfg.sheet_path(), &cfg.table_date_layout)?;
        BackfillLogic::run(&mut sheet, cfg, &opts)?;
    }
    Ok(())
}
