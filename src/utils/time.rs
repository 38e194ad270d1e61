//! Time utilities: parsing HH:MM:SS start times and Go-style durations ("8h", "7h30m").

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

pub const TIME_LAYOUT: &str = "%H:%M:%S";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_LAYOUT).ok()
}

/// Parse a list of start-of-day options, failing on the first invalid entry.
pub fn parse_time_options(options: &[String]) -> AppResult<Vec<NaiveTime>> {
    options
        .iter()
        .map(|opt| {
            parse_time(opt).ok_or_else(|| {
                AppError::InvalidTime(format!("can not parse '{}' started option", opt))
            })
        })
        .collect()
}

/// Parse a duration made of `<number><unit>` chunks.
///
/// Units: `h`, `m`, `s`, `ms`. Numbers may be fractional (`7.5h`).
/// A bare `0` is accepted.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s == "0" {
        return Some(Duration::zero());
    }

    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if rest.is_empty() {
        return None;
    }

    let mut total_ms = 0.0_f64;

    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            return None;
        }
        let value: f64 = rest[..num_end].parse().ok()?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_end] {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            "ms" => 1.0,
            _ => return None,
        };
        rest = &rest[unit_end..];

        total_ms += value * scale;
    }

    let ms = total_ms.round() as i64;
    Duration::try_milliseconds(if negative { -ms } else { ms })
}

/// Human form of a duration, e.g. `8h0m0s`, `7h30m0s`.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.abs();
    format!(
        "{}{}h{}m{}s",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
