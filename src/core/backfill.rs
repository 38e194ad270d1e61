// src/core/backfill.rs

use crate::config::Config;
use crate::core::calendar::generate_working_days;
use crate::core::dates::DateSet;
use crate::core::generator::FixedWorkdayGenerator;
use crate::core::records::generate_table;
use crate::errors::{AppError, AppResult};
use crate::export::render_pretty;
use crate::sheet::{Spreadsheet, render_cell};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{format_date, max_date, next_day, parse_date_slice, today};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::io;

/// Command-line overrides of a backfill run.
#[derive(Debug, Clone, Default)]
pub struct BackfillOptions {
    /// First day (inclusive); defaults to the day after the last sheet date.
    pub start: Option<NaiveDate>,
    /// Last day (exclusive); defaults to today.
    pub end: Option<NaiveDate>,
    /// Print the generated rows instead of appending them.
    pub dry_run: bool,
}

/// High-level backfill flow.
pub struct BackfillLogic;

impl BackfillLogic {
    /// Fill the sheet with one generated row per working day in `[start, end)`.
    ///
    /// Every configuration problem and a date overlap with the sheet are
    /// reported before anything is written. Returns the number of rows produced.
    pub fn run<S: Spreadsheet>(
        sheet: &mut S,
        cfg: &Config,
        opts: &BackfillOptions,
    ) -> AppResult<usize> {
        let settings = cfg.validate()?;

        let table = sheet.read()?;
        check_columns(table.columns(), cfg)?;

        let formats = match sheet.cell_formats() {
            Ok(f) => f,
            Err(e) => {
                warning(format!("unable to retrieve cell formats from sheet: {e}"));
                None
            }
        };

        let date_cells = table.column(&cfg.columns.date).unwrap_or_default();
        let sheet_dates = parse_date_slice(date_cells, &cfg.table_date_layout).map_err(|e| {
            AppError::InvalidDate(format!(
                "can not parse '{}' column in sheet: {}",
                cfg.columns.date, e
            ))
        })?;

        let start = match (opts.start, max_date(&sheet_dates)) {
            (Some(d), _) => d,
            (None, Some(last)) => next_day(last),
            (None, None) => {
                return Err(AppError::Config(
                    "the sheet has no dates yet, provide --start".into(),
                ));
            }
        };
        let end = opts.end.unwrap_or_else(today);

        header(format!(
            "Backfilling from {} till {}",
            format_date(start),
            format_date(end)
        ));

        let holidays = DateSet::from_file(&cfg.holidays_path())?;
        let days = generate_working_days(start, end, &holidays);

        if let Some(day) = first_overlap(&days, &sheet_dates) {
            return Err(AppError::Overlap(format_date(day)));
        }

        let vacations = match cfg.vacations_path() {
            Some(path) => {
                info(format!("Use vacations file: {}", path.display()));
                DateSet::from_file(&path)?
            }
            None => {
                info("Vacations file is not used");
                DateSet::new()
            }
        };

        let mut generator = FixedWorkdayGenerator::new(
            vacations,
            settings.started_options,
            settings.workday_duration,
        )?;

        let records = generate_table(&days, &mut generator, table.columns(), &cfg.columns)?;
        let added = records.n_rows();

        if opts.dry_run {
            let preview = records.map(|j, v| {
                render_cell(v, formats.as_deref().and_then(|f| f.get(j)))
            });
            render_pretty(&preview, &mut io::stdout().lock())?;
            info(format!("Dry run: {added} records would be added"));
            return Ok(added);
        }

        if added == 0 {
            info("No new records were added");
            return Ok(0);
        }

        sheet.append(&records, formats.as_deref())?;
        success(format!("{added} new records were successfully added to the sheet"));

        Ok(added)
    }
}

/// Required and mapped columns must all be present in the sheet header.
fn check_columns(columns: &[String], cfg: &Config) -> AppResult<()> {
    let mut missing: Vec<String> = cfg
        .required_columns()
        .into_iter()
        .filter(|c| !columns.contains(c))
        .collect();

    for m in cfg.columns.missing_in(columns) {
        if !missing.contains(&m) {
            missing.push(m);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(missing))
    }
}

/// First generated day already present in the sheet.
pub fn first_overlap(days: &[NaiveDate], sheet_dates: &[NaiveDate]) -> Option<NaiveDate> {
    let present: HashSet<NaiveDate> = sheet_dates.iter().copied().collect();
    days.iter().copied().find(|d| present.contains(d))
}
