// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod pretty;
mod xlsx;

pub use json_csv::{render_csv, render_json};
pub use logic::DumpLogic;
pub use pretty::render_pretty;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Pretty,
    Csv,
    Json,
    Xlsx,
}

impl DumpFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DumpFormat::Pretty => "pretty",
            DumpFormat::Csv => "csv",
            DumpFormat::Json => "json",
            DumpFormat::Xlsx => "xlsx",
        }
    }
}
