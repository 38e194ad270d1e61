// src/core/records.rs

use crate::core::cell::CellValue;
use crate::core::generator::{Record, RecordGenerator};
use crate::core::serial::{date_serial, duration_serial, time_serial};
use crate::core::table::ColumnTable;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Logical role → physical column name in the sheet.
///
/// An empty name disables the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub date: String,
    pub started: String,
    pub finished: String,
    pub duration: String,
    pub comment: String,
    pub month: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            started: "Started".into(),
            finished: "Finished".into(),
            duration: "Duration".into(),
            comment: "Comment".into(),
            month: "Month".into(),
        }
    }
}

impl ColumnNames {
    /// Non-empty mapped names, in role order.
    pub fn mapped(&self) -> Vec<&str> {
        [
            &self.date,
            &self.started,
            &self.finished,
            &self.duration,
            &self.comment,
            &self.month,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|n| !n.is_empty())
        .collect()
    }

    /// Mapped names that are not among `columns`.
    pub fn missing_in(&self, columns: &[String]) -> Vec<String> {
        self.mapped()
            .into_iter()
            .filter(|n| !columns.iter().any(|c| c == n))
            .map(str::to_string)
            .collect()
    }
}

/// One row per day, in day order, laid out over `columns`.
///
/// Dates, times and durations are spreadsheet serials; the month is its English
/// name. Roles whose column is absent are skipped and unmapped columns stay empty.
pub fn generate_table<G>(
    days: &[NaiveDate],
    generator: &mut G,
    columns: &[String],
    mapping: &ColumnNames,
) -> AppResult<ColumnTable<CellValue>>
where
    G: RecordGenerator + ?Sized,
{
    let mut table = ColumnTable::new(days.len(), columns)?;

    let rows: Vec<(NaiveDate, Record)> = days
        .iter()
        .map(|d| (*d, generator.generate(*d)))
        .collect();

    fill(&mut table, &mapping.date, &rows, |d, _| date_serial(*d).into());
    fill(&mut table, &mapping.started, &rows, |_, r| {
        r.started().map_or(CellValue::Empty, |t| time_serial(t).into())
    });
    fill(&mut table, &mapping.finished, &rows, |_, r| {
        r.finished().map_or(CellValue::Empty, |t| time_serial(t).into())
    });
    fill(&mut table, &mapping.duration, &rows, |_, r| {
        r.duration().map_or(CellValue::Empty, |d| duration_serial(d).into())
    });
    fill(&mut table, &mapping.comment, &rows, |_, r| r.comment().into());
    fill(&mut table, &mapping.month, &rows, |d, _| {
        d.format("%B").to_string().into()
    });

    Ok(table)
}

/// Write one role's column; no-op when the role has no column.
fn fill<F>(
    table: &mut ColumnTable<CellValue>,
    name: &str,
    rows: &[(NaiveDate, Record)],
    render: F,
) where
    F: Fn(&NaiveDate, &Record) -> CellValue,
{
    if name.is_empty() {
        return;
    }
    let Some(column) = table.column_mut(name) else {
        return;
    };

    for (cell, (day, record)) in column.iter_mut().zip(rows) {
        *cell = render(day, record);
    }
}
