// src/export/logic.rs

use crate::core::table::ColumnTable;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{render_csv, render_json};
use crate::export::pretty::render_pretty;
use crate::export::xlsx::export_xlsx;
use crate::export::{DumpFormat, notify_export_success};
use crate::sheet::Spreadsheet;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// High-level logic of the `dump` command.
pub struct DumpLogic;

impl DumpLogic {
    /// Render the whole sheet.
    ///
    /// - `output`: file to write, stdout when `None` (not allowed for xlsx)
    /// - `force`: overwrite an existing file without asking
    pub fn dump<S: Spreadsheet>(
        sheet: &S,
        format: DumpFormat,
        output: Option<&Path>,
        force: bool,
        date_layout: &str,
    ) -> AppResult<()> {
        let table = sheet.read()?;

        match output {
            Some(path) => {
                ensure_writable(path, force)?;
                Self::dump_to_file(&table, format, path, date_layout)
            }
            None if format == DumpFormat::Xlsx => Err(AppError::Export(
                "xlsx output needs --output <FILE>".into(),
            )),
            None => Self::write(&table, format, io::stdout().lock()),
        }
    }

    fn dump_to_file(
        table: &ColumnTable<String>,
        format: DumpFormat,
        path: &Path,
        date_layout: &str,
    ) -> AppResult<()> {
        if format == DumpFormat::Xlsx {
            return export_xlsx(table, path, date_layout);
        }

        let file = File::create(path)?;
        Self::write(table, format, BufWriter::new(file))?;
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }

    fn write<W: io::Write>(
        table: &ColumnTable<String>,
        format: DumpFormat,
        mut out: W,
    ) -> AppResult<()> {
        match format {
            DumpFormat::Pretty => render_pretty(table, &mut out),
            DumpFormat::Csv => render_csv(table, out),
            DumpFormat::Json => render_json(table, out),
            DumpFormat::Xlsx => Err(AppError::Export(
                "xlsx can only be written to a file".into(),
            )),
        }
    }
}
