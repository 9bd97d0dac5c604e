//! File conversion driver
//!
//! Runs one input file through import, inference and SQL generation, and batches
//! several files so that a failure in one does not stop the others.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::export::{Dialect, ExportError, ExportStats, SQLExporter};
use crate::import::{ImportError, read_grid};
use crate::inference::{ColumnDescriptor, ColumnInferrer, InferenceConfig};
use crate::models::table_name_from_path;

/// Error while converting one file
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Header row produced no columns
    #[error("no columns found in header row")]
    NoColumns,
}

impl ConvertError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Import(e) => e.user_message(),
            ConvertError::Export(e) => e.user_message(),
            ConvertError::NoColumns => format!(
                "{}\n\nHint: The first row must hold at least one column header.",
                self
            ),
        }
    }
}

/// One file to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Input CSV or workbook
    pub input: PathBuf,
    /// Database name used in the script and the output file name
    pub database: String,
    /// Table name used in the script and the output file name
    pub table: String,
    /// Target dialect
    pub dialect: Dialect,
    /// Directory the script is written to
    pub output_dir: PathBuf,
}

impl ConversionJob {
    /// Create a job with the table named after the input file, writing next to the
    /// current directory in the generic dialect.
    pub fn new(input: impl Into<PathBuf>, database: impl Into<String>) -> Self {
        let input = input.into();
        let table = table_name_from_path(&input);
        Self {
            input,
            database: database.into(),
            table,
            dialect: Dialect::default(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path the script will be written to
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(SQLExporter::output_file_name(
            &self.table,
            &self.database,
            self.dialect,
        ))
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// Input file
    pub input: PathBuf,
    /// Written SQL script
    pub output: PathBuf,
    /// Inferred columns, in header order
    pub columns: Vec<ColumnDescriptor>,
    /// Row counts
    pub stats: ExportStats,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful conversions, in job order
    pub converted: Vec<ConversionOutcome>,
    /// Failed inputs with their errors, in job order
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    /// True when at least one job failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Read, infer and write one file.
pub fn convert_file(
    job: &ConversionJob,
    config: &InferenceConfig,
) -> Result<ConversionOutcome, ConvertError> {
    info!(input = %job.input.display(), table = %job.table, "Converting file");

    let grid = read_grid(&job.input)?;
    if grid.column_count() == 0 {
        return Err(ConvertError::NoColumns);
    }

    let columns = ColumnInferrer::with_config(config.clone()).infer_grid(&grid);

    let exporter = SQLExporter::new(job.dialect).with_catalog(config.temporal.clone());
    let (output, stats) = exporter.write_file(
        &job.output_dir,
        &job.table,
        &job.database,
        &columns,
        &grid.rows,
    )?;

    if stats.rows_skipped > 0 {
        info!(
            input = %job.input.display(),
            skipped = stats.rows_skipped,
            "Skipped blank rows"
        );
    }

    Ok(ConversionOutcome {
        input: job.input.clone(),
        output,
        columns,
        stats,
    })
}

/// Convert several files in order, collecting failures instead of stopping.
///
/// Jobs are pulled one at a time, so a lazy iterator may prompt for each job's
/// details right before it runs. `on_result` is called after each job.
pub fn convert_all<I, F>(jobs: I, config: &InferenceConfig, mut on_result: F) -> BatchReport
where
    I: IntoIterator<Item = ConversionJob>,
    F: FnMut(&Path, Result<&ConversionOutcome, &ConvertError>),
{
    let mut report = BatchReport::default();

    for job in jobs {
        match convert_file(&job, config) {
            Ok(outcome) => {
                on_result(&job.input, Ok(&outcome));
                report.converted.push(outcome);
            }
            Err(e) => {
                debug!(input = %job.input.display(), error = %e, "Conversion failed");
                on_result(&job.input, Err(&e));
                report.failed.push((job.input, e));
            }
        }
    }

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "Batch finished"
    );
    report
}
