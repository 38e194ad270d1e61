use chrono::{Duration, NaiveDate};

use crate::core::serial::serial_to_date;

/// Layout of dates in holiday/vacation files and on the command line.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_LAYOUT).ok()
}

/// Parse a date cell read back from the sheet.
///
/// Cells are expected in `layout`; a bare number is accepted as a
/// spreadsheet serial (a sheet written without date formatting).
pub fn parse_sheet_date(s: &str, layout: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
        return Some(d);
    }
    s.parse::<f64>().ok().and_then(serial_to_date)
}

/// Parse a whole column of sheet dates, failing on the first bad cell.
/// Blank cells (trailing empty rows) are ignored.
pub fn parse_date_slice(values: &[String], layout: &str) -> Result<Vec<NaiveDate>, String> {
    let mut out = Vec::with_capacity(values.len());

    for v in values.iter().filter(|v| !v.trim().is_empty()) {
        let d = parse_sheet_date(v, layout)
            .ok_or_else(|| format!("'{}' does not match layout '{}'", v, layout))?;
        out.push(d);
    }

    Ok(out)
}

pub fn max_date(dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.iter().max().copied()
}

pub fn next_day(d: NaiveDate) -> NaiveDate {
    d.checked_add_signed(Duration::days(1)).unwrap_or(d)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_LAYOUT).to_string()
}
