//! Normalization of ragged row data into a rectangular table.

use serde_json::Value;

use crate::error::{Result, SheetError};

/// A rectangular table keyed by its header row.
///
/// Invariants: no empty rows, no empty-string column name, every row exactly
/// as wide as the header. Duplicate column names are accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Text of a header cell. Non-string cells keep their JSON rendering.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl Table {
    /// Build a table from raw sheet rows.
    ///
    /// Empty rows are discarded; the first remaining row becomes the header
    /// and defines column count and order. Shorter data rows are right-padded
    /// with empty-string cells. Fails with [`SheetError::BlankTable`] when
    /// nothing remains, [`SheetError::MissingColumnName`] when a header cell
    /// is empty, and [`SheetError::RowWiderThanHeader`] when a data row has
    /// more cells than the header.
    pub fn from_rows(raw: Vec<Vec<Value>>) -> Result<Self> {
        let mut rows: Vec<Vec<Value>> = raw.into_iter().filter(|row| !row.is_empty()).collect();
        if rows.is_empty() {
            return Err(SheetError::BlankTable);
        }

        let columns: Vec<String> = rows.remove(0).into_iter().map(cell_text).collect();
        if columns.iter().any(|name| name.is_empty()) {
            return Err(SheetError::MissingColumnName);
        }

        for (index, row) in rows.iter_mut().enumerate() {
            if row.len() > columns.len() {
                return Err(SheetError::RowWiderThanHeader {
                    row: index,
                    width: row.len(),
                    columns: columns.len(),
                });
            }
            while row.len() < columns.len() {
                row.push(Value::String(String::new()));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Column names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, each exactly `columns().len()` wide.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Position of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
