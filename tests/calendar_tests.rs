mod common;
use chrono::{Datelike, Weekday};
use common::d;
use rregister::core::calendar::{generate_working_days, is_weekend};
use rregister::core::DateSet;

#[test]
fn test_holiday_scenario_around_new_year() {
    // Fri 2023-12-29 .. Wed 2024-01-03 (excluded), New Year's Day is a holiday.
    let holidays = DateSet::from_lines(["2024-01-01"]);

    let days = generate_working_days(d(2023, 12, 29), d(2024, 1, 3), &holidays);

    assert_eq!(days, vec![d(2023, 12, 29), d(2024, 1, 2)]);
}

#[test]
fn test_no_holidays_gives_all_weekdays_in_order() {
    // 2025-01-06 is a Monday; two full weeks.
    let days = generate_working_days(d(2025, 1, 6), d(2025, 1, 20), &DateSet::new());

    assert_eq!(days.len(), 10);
    assert!(days.iter().all(|day| !is_weekend(*day)));
    assert!(days.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(days.first(), Some(&d(2025, 1, 6)));
    assert_eq!(days.last(), Some(&d(2025, 1, 17)));
}

#[test]
fn test_end_is_exclusive() {
    let days = generate_working_days(d(2025, 1, 6), d(2025, 1, 7), &DateSet::new());
    assert_eq!(days, vec![d(2025, 1, 6)]);
}

#[test]
fn test_empty_or_reversed_range() {
    let none = DateSet::new();
    assert!(generate_working_days(d(2025, 1, 6), d(2025, 1, 6), &none).is_empty());
    assert!(generate_working_days(d(2025, 1, 10), d(2025, 1, 6), &none).is_empty());
}

#[test]
fn test_holidays_only_remove_weekdays() {
    let start = d(2024, 4, 1);
    let end = d(2024, 6, 1);
    // Sat 2024-05-04 is a weekend holiday: no extra effect.
    let holidays = DateSet::from_dates(vec![d(2024, 5, 1), d(2024, 5, 4), d(2024, 4, 25)]);

    let all = generate_working_days(start, end, &DateSet::new());
    let filtered = generate_working_days(start, end, &holidays);

    assert!(filtered.iter().all(|day| all.contains(day)));
    let removed: Vec<_> = all.iter().filter(|day| !filtered.contains(day)).copied().collect();
    assert_eq!(removed, vec![d(2024, 4, 25), d(2024, 5, 1)]);
}

#[test]
fn test_back_to_back_ranges_cover_span_once() {
    let none = DateSet::new();
    let mut joined = generate_working_days(d(2024, 2, 1), d(2024, 2, 14), &none);
    joined.extend(generate_working_days(d(2024, 2, 14), d(2024, 3, 1), &none));

    assert_eq!(joined, generate_working_days(d(2024, 2, 1), d(2024, 3, 1), &none));
    // 2024 is a leap year: Thu 2024-02-29 is in.
    assert_eq!(joined.last().map(|d| d.weekday()), Some(Weekday::Thu));
}

#[test]
fn test_generation_is_idempotent() {
    let holidays = DateSet::from_lines(["2024-01-01", "2024-12-25"]);
    let a = generate_working_days(d(2023, 12, 1), d(2025, 1, 1), &holidays);
    let b = generate_working_days(d(2023, 12, 1), d(2025, 1, 1), &holidays);
    assert_eq!(a, b);
}

#[test]
fn test_is_weekend() {
    assert!(is_weekend(d(2025, 1, 11)));
    assert!(is_weekend(d(2025, 1, 12)));
    assert!(!is_weekend(d(2025, 1, 13)));
}
