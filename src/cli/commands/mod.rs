pub mod backfill;
pub mod config;
pub mod days;
pub mod dump;
pub mod init;

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Parse an optional `YYYY-MM-DD` command-line date.
pub(crate) fn parse_cli_date(
    name: &str,
    value: &Option<String>,
) -> AppResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => parse_date(s).map(Some).ok_or_else(|| {
            AppError::InvalidDate(format!("{name} date provided in wrong format: '{s}'"))
        }),
    }
}
