// src/core/serial.rs

//! Spreadsheet serial encoding: day 0 is 1899-12-30, one unit is 24 hours.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// Date → whole-number serial (e.g. 2024-01-01 → 45292).
pub fn date_serial(d: NaiveDate) -> f64 {
    (d - epoch()).num_days() as f64
}

/// Time of day → fraction of a day (12:00:00 → 0.5).
pub fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

/// Duration → fraction of a day (8h → 0.333…).
pub fn duration_serial(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Integer part of a serial back to a date. `None` for NaN or out of range.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = Duration::try_days(serial.floor() as i64)?;
    epoch().checked_add_signed(days)
}

/// Fractional part of a serial back to a time of day, rounded to the second.
pub fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() {
        return None;
    }
    let secs = (serial.rem_euclid(1.0) * SECONDS_PER_DAY).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}
