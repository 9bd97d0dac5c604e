//! Raw tabular data as produced by the importers

use serde::{Deserialize, Serialize};

/// A header row plus data rows of untyped cell text.
///
/// Rows may be shorter than the header; missing trailing cells read as empty.
/// Cells are matched to headers by position only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrid {
    /// Column names, one per column
    pub headers: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// Create a grid from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of columns, taken from the header row
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, blank rows included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over the cells of one column, yielding `""` for missing cells.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Number of rows that contain at least one non-blank cell
    pub fn non_blank_row_count(&self) -> usize {
        self.rows.iter().filter(|row| !is_blank_row(row)).count()
    }
}

/// True when every cell in the row is empty or whitespace.
pub fn is_blank_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|cell| cell.as_ref().trim().is_empty())
}
