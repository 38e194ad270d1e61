// src/export/excel_date.rs

use crate::core::serial::{date_serial, time_serial};
use chrono::{NaiveDate, NaiveTime};

/// Try to read a displayed cell as a date or a time of day, returning the
/// spreadsheet serial plus the number format to show it with.
pub(crate) fn parse_to_excel_date(s: &str, date_layout: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, date_layout) {
        return Some(("yyyy-mm-dd", date_serial(d)));
    }

    let time_formats = [("%H:%M:%S", "hh:mm:ss"), ("%H:%M", "hh:mm")];

    for (fmt, num_format) in time_formats {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some((num_format, time_serial(t)));
        }
    }

    None
}
