// src/core/dates.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::DATE_LAYOUT;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Sorted, de-duplicated set of calendar days (holidays, vacations).
///
/// Built once, read-only afterwards; membership is a binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSet {
    dates: Vec<NaiveDate>,
}

impl DateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an unordered list; order and duplicates in the input are irrelevant.
    pub fn from_dates(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    /// Parse one `YYYY-MM-DD` day per line.
    ///
    /// Blank lines are ignored; lines that do not parse are reported with a
    /// warning and skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = Vec::with_capacity(128);

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            match NaiveDate::parse_from_str(line, DATE_LAYOUT) {
                Ok(d) => dates.push(d),
                Err(e) => warning(format!("Can not parse date line '{line}' - skipped, err: {e}")),
            }
        }

        Self::from_dates(dates)
    }

    /// Read a holiday/vacation file. An unreadable file is a configuration error.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("can not read dates file {}: {}", path.display(), e))
        })?;
        Ok(Self::from_lines(content.lines()))
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.dates.binary_search(&day).is_ok()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }
}

impl FromIterator<NaiveDate> for DateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self::from_dates(iter.into_iter().collect())
    }
}
