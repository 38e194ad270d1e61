use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::format_duration;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let settings = cfg.validate()?;

            info(format!("Sheet file    : {}", cfg.sheet_path().display()));
            info(format!("Holidays file : {}", cfg.holidays_path().display()));
            match cfg.vacations_path() {
                Some(p) => info(format!("Vacations file: {}", p.display())),
                None => info("Vacations file: not used"),
            }
            info(format!(
                "Workday       : {} starting at one of {:?}",
                format_duration(settings.workday_duration),
                cfg.started_options
            ));
            success("Configuration is valid");
        }
    }

    Ok(())
}
