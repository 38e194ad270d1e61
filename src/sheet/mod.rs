// src/sheet/mod.rs

//! Spreadsheet collaborator boundary.
//!
//! The core only exchanges `ColumnTable`s with a sheet: it reads display
//! values, samples per-column formatting and appends generated rows.

mod csv_sheet;

pub use csv_sheet::CsvSheet;

use crate::core::cell::CellValue;
use crate::core::serial::{serial_to_date, serial_to_time};
use crate::core::table::ColumnTable;
use crate::errors::AppResult;
use crate::utils::time::TIME_LAYOUT;
use chrono::{NaiveDate, NaiveTime};

/// Number format of one column, sampled from an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellFormat {
    /// Serial shown as a date with the given chrono layout.
    Date(String),
    /// Serial fraction shown as a time of day with the given chrono layout.
    Time(String),
    General,
}

pub trait Spreadsheet {
    /// Existing rows as formatted (display) values, header as column names.
    fn read(&self) -> AppResult<ColumnTable<String>>;

    /// Formatting of each column, if the sheet has a row to sample it from.
    fn cell_formats(&self) -> AppResult<Option<Vec<CellFormat>>>;

    /// Append `values` as new trailing rows. Columns must follow the sheet header.
    fn append(
        &mut self,
        values: &ColumnTable<CellValue>,
        formats: Option<&[CellFormat]>,
    ) -> AppResult<()>;
}

/// Guess the format of a displayed cell.
pub fn infer_format(cell: &str, date_layout: &str) -> CellFormat {
    let s = cell.trim();

    if NaiveDate::parse_from_str(s, date_layout).is_ok() {
        return CellFormat::Date(date_layout.to_string());
    }

    for layout in [TIME_LAYOUT, "%H:%M"] {
        if NaiveTime::parse_from_str(s, layout).is_ok() {
            return CellFormat::Time(layout.to_string());
        }
    }

    CellFormat::General
}

/// Display form of a generated cell under an optional column format.
pub fn render_cell(value: &CellValue, format: Option<&CellFormat>) -> String {
    match (value, format) {
        (CellValue::Number(n), Some(CellFormat::Date(layout))) => serial_to_date(*n)
            .map(|d| d.format(layout).to_string())
            .unwrap_or_else(|| n.to_string()),
        (CellValue::Number(n), Some(CellFormat::Time(layout))) => serial_to_time(*n)
            .map(|t| t.format(layout).to_string())
            .unwrap_or_else(|| n.to_string()),
        _ => value.to_string(),
    }
}
