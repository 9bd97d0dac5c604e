//! Import functionality
//!
//! Reads spreadsheet-like input files into a [`RawGrid`]:
//! - CSV (first record is the header row)
//! - XLSX / XLS (first worksheet only, first row is the header row)
//!
//! Header cells are sanitized into SQL identifiers on the way in.

pub mod delimited;
pub mod workbook;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::RawGrid;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Extension is not one of the supported input formats
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(PathBuf),

    /// Workbook has no worksheets
    #[error("no sheets found")]
    NoSheets,

    /// First worksheet has no rows
    #[error("sheet is empty")]
    EmptySheet,

    /// CSV file has no header record
    #[error("file is empty")]
    EmptyFile,

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook parse error
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            ImportError::UnsupportedExtension(path) => format!(
                "Unsupported file type: {}\n\nHint: Only .csv, .xlsx and .xls files can be converted.",
                path.display()
            ),
            ImportError::EmptySheet | ImportError::EmptyFile => format!(
                "{}\n\nHint: The first row must hold the column headers.",
                self
            ),
            ImportError::Csv(e) => format!(
                "CSV error: {}\n\nHint: Check quoting and the file encoding (UTF-8 expected).",
                e
            ),
            _ => self.to_string(),
        }
    }
}

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma separated values
    Csv,
    /// Excel workbook (`.xlsx` or legacy `.xls`)
    Workbook,
}

impl InputFormat {
    /// Detect the format from a path's extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "xlsx" | "xls" => Some(InputFormat::Workbook),
            _ => None,
        }
    }
}

/// Read an input file into a grid, dispatching on its extension.
pub fn read_grid(path: &Path) -> Result<RawGrid, ImportError> {
    let format = InputFormat::from_path(path)
        .ok_or_else(|| ImportError::UnsupportedExtension(path.to_path_buf()))?;

    debug!(path = %path.display(), ?format, "Reading input grid");

    let grid = match format {
        InputFormat::Csv => delimited::read_csv(path)?,
        InputFormat::Workbook => workbook::read_workbook(path)?,
    };

    debug!(
        path = %path.display(),
        columns = grid.column_count(),
        rows = grid.row_count(),
        "Read input grid"
    );
    Ok(grid)
}

/// Find convertible files directly inside `dir`.
///
/// Subdirectories are not searched. Results are sorted by path.
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && InputFormat::from_path(&path).is_some() {
                    files.push(path);
                }
            }
            Err(e) => {
                warn!("Error accessing path: {}", e);
            }
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "Discovered input files");
    Ok(files)
}
