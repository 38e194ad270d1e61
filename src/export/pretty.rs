// src/export/pretty.rs

use crate::core::table::ColumnTable;
use crate::errors::AppResult;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Fixed-width table: values right-justified between `|`, rows framed by dashes.
pub fn render_pretty<W: Write>(table: &ColumnTable<String>, out: &mut W) -> AppResult<()> {
    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.width()).collect();

    for row in table.rows() {
        for (j, v) in row.into_iter().enumerate() {
            widths[j] = widths[j].max(v.width());
        }
    }

    let rule = "-".repeat(widths.iter().sum::<usize>() + widths.len() + 1);

    writeln!(out, "{rule}")?;
    writeln!(out, "{}", pretty_row(table.columns().iter(), &widths))?;
    writeln!(out, "{rule}")?;

    for row in table.rows() {
        writeln!(out, "{}", pretty_row(row.into_iter(), &widths))?;
        writeln!(out, "{rule}")?;
    }

    out.flush()?;
    Ok(())
}

fn pretty_row<'a>(cells: impl Iterator<Item = &'a String>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.zip(widths) {
        let pad = w.saturating_sub(cell.width());
        line.push_str(&" ".repeat(pad));
        line.push_str(cell);
        line.push('|');
    }
    line
}
