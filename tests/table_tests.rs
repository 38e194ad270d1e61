use rregister::core::ColumnTable;
use rregister::errors::AppError;

fn names() -> Vec<String> {
    ["Date", "Started", "Finished", "Comment"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_empty_table() {
    let table: ColumnTable<String> = ColumnTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.n_cols(), 0);
    assert_eq!(table.n_rows(), 0);
    assert!(table.row(0).is_none());
    assert_eq!(ColumnTable::<String>::default(), table);
}

#[test]
fn test_zero_rows_keeps_columns() {
    let table: ColumnTable<String> = ColumnTable::new(0, &names()).expect("table");
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 4);
    assert!(!table.is_empty());
}

#[test]
fn test_new_fills_with_default_values() {
    let table: ColumnTable<i64> = ColumnTable::new(3, &["a", "b"]).expect("table");
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.column("a"), Some(&[0, 0, 0][..]));
    assert_eq!(table.row(2), Some(vec![&0, &0]));
}

#[test]
fn test_column_index_matches_input_order() {
    let table: ColumnTable<String> = ColumnTable::new(2, &names()).expect("table");

    for (i, name) in names().iter().enumerate() {
        assert_eq!(table.column_index(name), Some(i));
        assert_eq!(table.column_indexer()[name.as_str()], i);
    }
    assert_eq!(table.column_index("Month"), None);
    assert!(table.column("Month").is_none());
}

#[test]
fn test_write_column_then_read_row() {
    let mut table: ColumnTable<String> = ColumnTable::new(3, &names()).expect("table");

    table.column_mut("Comment").expect("comment column")[1] = "vacationing".to_string();
    table.column_mut("Date").expect("date column")[1] = "2024-01-02".to_string();

    let row = table.row(1).expect("row 1");
    let idx = table.column_index("Comment").expect("index");
    assert_eq!(row[idx], "vacationing");
    assert_eq!(row[0], "2024-01-02");
    assert_eq!(row.len(), table.n_cols());

    assert_eq!(table.row(0).expect("row 0")[idx], "");
    assert!(table.row(3).is_none());
    assert!(table.column_mut("Missing").is_none());
}

#[test]
fn test_duplicate_column_names_rejected() {
    let err = ColumnTable::<String>::new(1, &["Date", "Comment", "Date"]).unwrap_err();
    assert!(matches!(err, AppError::DuplicateColumn(name) if name == "Date"));
}

#[test]
fn test_from_rows_pads_short_rows_and_drops_extra_cells() {
    let header = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let rows = vec![
        vec!["1".to_string()],
        vec!["2".to_string(), "x".to_string(), "y".to_string(), "overflow".to_string()],
    ];

    let table = ColumnTable::from_rows(header, rows).expect("table");

    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.row(0).expect("row"), vec!["1", "", ""]);
    assert_eq!(table.row(1).expect("row"), vec!["2", "x", "y"]);
}

#[test]
fn test_rows_iterates_in_row_order() {
    let header = vec!["n".to_string(), "sq".to_string()];
    let rows = (1..=3).map(|i| vec![i, i * i]).collect();
    let table: ColumnTable<i32> = ColumnTable::from_rows(header, rows).expect("table");

    let collected: Vec<Vec<i32>> = table
        .rows()
        .map(|r| r.into_iter().copied().collect())
        .collect();
    assert_eq!(collected, vec![vec![1, 1], vec![2, 4], vec![3, 9]]);

    let doubled = table.map(|_, v| v * 2);
    assert_eq!(doubled.column("sq"), Some(&[2, 8, 18][..]));
    assert_eq!(doubled.columns(), table.columns());
}
