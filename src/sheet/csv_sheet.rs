// src/sheet/csv_sheet.rs

use crate::core::cell::CellValue;
use crate::core::table::ColumnTable;
use crate::errors::{AppError, AppResult};
use crate::sheet::{CellFormat, Spreadsheet, infer_format, render_cell};
use std::fs;
use std::path::PathBuf;

/// A register kept in a local CSV file; the first record is the header.
#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
    date_layout: String,
}

impl CsvSheet {
    pub fn open(path: impl Into<PathBuf>, date_layout: &str) -> AppResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(AppError::Sheet(format!(
                "sheet file not found: {}",
                path.display()
            )));
        }

        Ok(Self {
            path,
            date_layout: date_layout.to_string(),
        })
    }

    fn read_records(&self) -> AppResult<Vec<Vec<String>>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            records.push(rec.iter().map(str::to_string).collect());
        }

        Ok(records)
    }
}

impl Spreadsheet for CsvSheet {
    fn read(&self) -> AppResult<ColumnTable<String>> {
        let mut records = self.read_records()?.into_iter();

        match records.next() {
            Some(mut header) => {
                trim_header(&mut header);
                // Cells beyond the header are dropped by `from_rows`.
                ColumnTable::from_rows(header, records.collect())
            }
            None => Ok(ColumnTable::empty()),
        }
    }

    fn cell_formats(&self) -> AppResult<Option<Vec<CellFormat>>> {
        let table = self.read()?;
        if table.n_rows() == 0 {
            return Ok(None);
        }

        // First non-blank cell of each column decides its format.
        let formats = table
            .values()
            .iter()
            .map(|col| {
                col.iter()
                    .find(|c| !c.trim().is_empty())
                    .map_or(CellFormat::General, |c| infer_format(c, &self.date_layout))
            })
            .collect();

        Ok(Some(formats))
    }

    fn append(
        &mut self,
        values: &ColumnTable<CellValue>,
        formats: Option<&[CellFormat]>,
    ) -> AppResult<()> {
        let existing = self.read_records()?;

        if let Some(first) = existing.first()
            && header_names(first) != values.columns()
        {
            return Err(AppError::Sheet(format!(
                "appended columns {:?} do not match sheet header {:?}",
                values.columns(),
                header_names(first)
            )));
        }

        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        if existing.is_empty() {
            wtr.write_record(values.columns())?;
        }
        for rec in &existing {
            wtr.write_record(rec)?;
        }

        for row in values.rows() {
            let cells: Vec<String> = row
                .into_iter()
                .enumerate()
                .map(|(j, v)| render_cell(v, formats.and_then(|f| f.get(j))))
                .collect();
            wtr.write_record(&cells)?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| AppError::Sheet(format!("CSV buffer error: {e}")))?;

        // Replace the file in one rename.
        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        Ok(())
    }
}

/// Drop trailing blank header cells (spreadsheet exports pad rows with `,,`).
fn trim_header(header: &mut Vec<String>) {
    let len = header_names(header).len();
    header.truncate(len);
}

fn header_names(header: &[String]) -> &[String] {
    let len = header
        .iter()
        .rposition(|c| !c.trim().is_empty())
        .map_or(0, |i| i + 1);
    &header[..len]
}
