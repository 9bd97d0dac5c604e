//! Export functionality
//!
//! Renders inferred columns and data rows as a SQL script for one of the
//! supported [`Dialect`]s.

pub mod dialect;
pub mod sql;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Row counts from one export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    /// INSERT statements emitted
    pub rows_written: usize,
    /// Blank rows skipped
    pub rows_skipped: usize,
}

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
    /// Row counts
    pub stats: ExportStats,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Cannot create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Export error: {0}")]
    ExportError(String),
}

impl ExportError {
    /// Short message suitable for end users
    pub fn user_message(&self) -> String {
        match self {
            ExportError::IoError(e) => format!("Failed writing SQL output: {}", e),
            ExportError::CreateOutput { path, source } => {
                format!("Could not create '{}': {}", path.display(), source)
            }
            ExportError::ExportError(msg) => msg.clone(),
        }
    }
}

pub use dialect::Dialect;
pub use sql::SQLExporter;
