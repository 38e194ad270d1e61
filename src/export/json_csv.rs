// src/export/json_csv.rs

use crate::core::table::ColumnTable;
use crate::errors::AppResult;
use serde::Serialize;
use std::io::Write;

/// CSV with the column names as header.
pub fn render_csv<W: Write>(table: &ColumnTable<String>, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonTable<'a> {
    columns: &'a [String],
    rows: Vec<Vec<&'a String>>,
}

/// Pretty-printed `{"columns": [...], "rows": [[...], ...]}`.
pub fn render_json<W: Write>(table: &ColumnTable<String>, mut out: W) -> AppResult<()> {
    let doc = JsonTable {
        columns: table.columns(),
        rows: table.rows().collect(),
    };

    serde_json::to_writer_pretty(&mut out, &doc)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
