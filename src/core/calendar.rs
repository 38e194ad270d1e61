// src/core/calendar.rs

use crate::core::dates::DateSet;
use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Saturday and Sunday.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Working days in `[start, end)`, ascending.
///
/// Weekends and any day in `holidays` are skipped. `start >= end` gives an
/// empty list, so consecutive ranges sharing a bound never overlap.
pub fn generate_working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &DateSet,
) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d < end)
        .filter(|d| !is_weekend(*d) && !holidays.contains(*d))
        .collect()
}
