use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::DumpLogic;
use crate::sheet::CsvSheet;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dump {
        format,
        output,
        force,
    } = cmd
    {
        let sheet = CsvSheet::open(cfg.sheet_path(), &cfg.table_date_layout)?;
        DumpLogic::dump(
            &sheet,
            *format,
            output.as_deref().map(Path::new),
            *force,
            &cfg.table_date_layout,
        )?;
    }
    Ok(())
}
