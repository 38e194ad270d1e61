mod common;
use chrono::{Duration, NaiveDate, NaiveTime};
use common::d;
use rregister::core::serial::{
    date_serial, duration_serial, serial_to_date, serial_to_time, time_serial,
};
use rregister::core::{
    CellValue, ColumnNames, DateSet, FixedWorkdayGenerator, Record, generate_table,
};
use rregister::sheet::{CellFormat, infer_format, render_cell};

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

fn sheet_columns() -> Vec<String> {
    ["Date", "Started", "Finished", "Duration", "Comment", "Month"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_serial_epoch_and_known_dates() {
    assert_eq!(date_serial(d(1899, 12, 30)), 0.0);
    assert_eq!(date_serial(d(1900, 1, 1)), 2.0);
    assert_eq!(date_serial(d(2024, 1, 1)), 45292.0);

    assert_eq!(time_serial(t(0, 0, 0)), 0.0);
    assert_eq!(time_serial(t(12, 0, 0)), 0.5);
    assert_eq!(time_serial(t(6, 0, 0)), 0.25);

    assert_eq!(duration_serial(Duration::hours(24)), 1.0);
    assert_eq!(duration_serial(Duration::hours(6)), 0.25);
}

#[test]
fn test_serial_back_to_date_and_time() {
    assert_eq!(serial_to_date(45292.0), Some(d(2024, 1, 1)));
    assert_eq!(serial_to_date(45292.75), Some(d(2024, 1, 1)));
    assert_eq!(serial_to_time(time_serial(t(17, 0, 0))), Some(t(17, 0, 0)));
    assert_eq!(serial_to_time(45292.5), Some(t(12, 0, 0)));
    assert_eq!(serial_to_date(f64::NAN), None);
}

#[test]
fn test_generate_table_one_row_per_day() {
    let days = vec![d(2024, 3, 4), d(2024, 3, 5)];
    let mut generator = FixedWorkdayGenerator::new(
        DateSet::from_dates(vec![d(2024, 3, 4)]),
        vec![t(9, 0, 0)],
        Duration::hours(8),
    )
    .expect("generator");

    let table = generate_table(&days, &mut generator, &sheet_columns(), &ColumnNames::default())
        .expect("table");

    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.n_cols(), 6);

    let vacation = table.row(0).expect("row 0");
    assert_eq!(vacation[0], &CellValue::Number(date_serial(d(2024, 3, 4))));
    assert_eq!(vacation[1], &CellValue::Empty);
    assert!(vacation[2].is_empty());
    assert_eq!(vacation[2], &CellValue::Empty);
    assert_eq!(vacation[3], &CellValue::Empty);
    assert_eq!(vacation[4], &CellValue::Text("vacationing".into()));
    assert_eq!(vacation[5], &CellValue::Text("March".into()));

    let worked = table.row(1).expect("row 1");
    assert_eq!(worked[1], &CellValue::Number(0.375));
    assert_eq!(worked[2], &CellValue::Number(time_serial(t(17, 0, 0))));
    assert_eq!(worked[3], &CellValue::Number(duration_serial(Duration::hours(8))));
    assert_eq!(worked[4], &CellValue::Text(String::new()));
}

#[test]
fn test_generate_table_follows_sheet_column_order_and_skips_unmapped() {
    // Sheet columns in a different order, plus a column no role writes to.
    let columns: Vec<String> = ["Notes", "Month", "Date"].iter().map(|s| s.to_string()).collect();
    let mut generator = |_: NaiveDate| Record::worked(t(9, 0, 0), Duration::hours(8));

    let table = generate_table(
        &[d(2024, 12, 2)],
        &mut generator,
        &columns,
        &ColumnNames::default(),
    )
    .expect("table");

    let row = table.row(0).expect("row");
    assert_eq!(row[0], &CellValue::Empty);
    assert_eq!(row[1], &CellValue::Text("December".into()));
    assert_eq!(row[2], &CellValue::Number(date_serial(d(2024, 12, 2))));
}

#[test]
fn test_generate_table_for_no_days() {
    let mut generator = |_: NaiveDate| Record::absent("never");
    let table = generate_table(&[], &mut generator, &sheet_columns(), &ColumnNames::default())
        .expect("table");
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 6);
}

#[test]
fn test_missing_mapped_columns_are_reported() {
    let mapping = ColumnNames {
        month: String::new(),
        comment: "Remark".into(),
        ..ColumnNames::default()
    };

    assert_eq!(mapping.missing_in(&sheet_columns()), vec!["Remark".to_string()]);
    assert_eq!(mapping.mapped().len(), 5);
}

#[test]
fn test_infer_and_render_formats() {
    assert_eq!(
        infer_format("2023-12-28", "%Y-%m-%d"),
        CellFormat::Date("%Y-%m-%d".into())
    );
    assert_eq!(infer_format("09:00:00", "%Y-%m-%d"), CellFormat::Time("%H:%M:%S".into()));
    assert_eq!(infer_format("9:30", "%Y-%m-%d"), CellFormat::Time("%H:%M".into()));
    assert_eq!(infer_format("December", "%Y-%m-%d"), CellFormat::General);

    let date = CellValue::Number(date_serial(d(2024, 1, 2)));
    assert_eq!(render_cell(&date, Some(&CellFormat::Date("%d.%m.%Y".into()))), "02.01.2024");
    assert_eq!(render_cell(&date, None), "45293");

    let finish = CellValue::Number(time_serial(t(17, 0, 0)));
    assert_eq!(render_cell(&finish, Some(&CellFormat::Time("%H:%M:%S".into()))), "17:00:00");

    assert_eq!(render_cell(&CellValue::Empty, Some(&CellFormat::General)), "");
    assert_eq!(render_cell(&CellValue::Text("vacationing".into()), None), "vacationing");
}
