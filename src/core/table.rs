// src/core/table.rs

//! Column-major table with named columns.
//!
//! Used as the hand-off format between the generator, the sheet backend and
//! the renderers: one `Vec<T>` per column, all columns of equal length.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnTable<T> {
    columns: Vec<String>,
    values: Vec<Vec<T>>,
}

impl<T> Default for ColumnTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> ColumnTable<T> {
    /// No columns, no rows: the "no data" table.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Zero for a table without columns.
    pub fn n_rows(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Name → position for every column.
    pub fn column_indexer(&self) -> HashMap<&str, usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.column_index(name).map(|i| self.values[i].as_slice())
    }

    /// Mutable view over one column. A slice, so the length cannot change.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut [T]> {
        let i = self.column_index(name)?;
        Some(self.values[i].as_mut_slice())
    }

    /// The `idx`-th value of every column, in column order.
    pub fn row(&self, idx: usize) -> Option<Vec<&T>> {
        if idx >= self.n_rows() {
            return None;
        }
        Some(self.values.iter().map(|col| &col[idx]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&T>> + '_ {
        (0..self.n_rows()).map(move |i| self.values.iter().map(|col| &col[i]).collect())
    }

    /// Column-major values, one `Vec` per column.
    pub fn values(&self) -> &[Vec<T>] {
        &self.values
    }

    /// Same shape, every value converted by `f(column_index, value)`.
    pub fn map<U, F>(&self, mut f: F) -> ColumnTable<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        ColumnTable {
            columns: self.columns.clone(),
            values: self
                .values
                .iter()
                .enumerate()
                .map(|(j, col)| col.iter().map(|v| f(j, v)).collect())
                .collect(),
        }
    }
}

impl<T: Default + Clone> ColumnTable<T> {
    /// One column per name, `rows` default values each.
    pub fn new<S: AsRef<str>>(rows: usize, names: &[S]) -> AppResult<Self> {
        let columns = unique_names(names.iter().map(|n| n.as_ref().to_string()))?;
        let values = vec![vec![T::default(); rows]; columns.len()];
        Ok(Self { columns, values })
    }

    /// Build from a header and row-major data.
    ///
    /// Short rows are padded with `T::default()`, cells beyond the header are dropped.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<T>>) -> AppResult<Self> {
        let mut table = Self::new(rows.len(), &header)?;

        for (i, row) in rows.into_iter().enumerate() {
            for (j, val) in row.into_iter().take(table.columns.len()).enumerate() {
                table.values[j][i] = val;
            }
        }

        Ok(table)
    }
}

fn unique_names(names: impl Iterator<Item = String>) -> AppResult<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if out.contains(&name) {
            return Err(AppError::DuplicateColumn(name));
        }
        out.push(name);
    }
    Ok(out)
}
