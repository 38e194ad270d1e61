use crate::cli::commands::parse_cli_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::generate_working_days;
use crate::core::dates::DateSet;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::{format_date, today};
use chrono::Datelike;

/// Print the working days of a range, one per line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days {
        start,
        end,
        vacations,
    } = cmd
    {
        let end = parse_cli_date("end", end)?.unwrap_or_else(today);
        let start = match parse_cli_date("start", start)? {
            Some(d) => d,
            None => end.with_day(1).unwrap_or(end),
        };

        let holidays = DateSet::from_file(&cfg.holidays_path())?;
        let vacation_set = match cfg.vacations_path() {
            Some(p) if *vacations => DateSet::from_file(&p)?,
            _ => DateSet::new(),
        };

        let days = generate_working_days(start, end, &holidays);
        if days.is_empty() {
            info(format!(
                "No working days between {} and {}",
                format_date(start),
                format_date(end)
            ));
        }

        for day in days {
            if vacation_set.contains(day) {
                println!("{} {} (vacation)", format_date(day), day.weekday());
            } else {
                println!("{} {}", format_date(day), day.weekday());
            }
        }
    }
    Ok(())
}
