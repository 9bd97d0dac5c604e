//! `infer` command: print inferred column types for one file

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_columns};
use crate::config::AppConfig;
use crate::convert::ConvertError;
use crate::import::read_grid;
use crate::inference::ColumnInferrer;

/// Arguments for the `infer` command
#[derive(Debug, Clone)]
pub struct InferArgs {
    /// Input CSV or workbook
    pub file: PathBuf,
    /// Output format
    pub format: OutputFormat,
}

/// Handle the `infer` command, returning the rendered descriptors
pub fn handle_infer(args: &InferArgs, config: &AppConfig) -> Result<String, CliError> {
    let grid = read_grid(&args.file).map_err(|e| CliError::Conversion {
        path: args.file.clone(),
        source: ConvertError::Import(e),
    })?;

    eprintln!(
        "Inferring column types from {} ({} columns, {} rows)...",
        args.file.display(),
        grid.column_count(),
        grid.row_count()
    );

    let columns = ColumnInferrer::with_config(config.inference.clone()).infer_grid(&grid);
    format_columns(&columns, args.format)
}
