//! `generate` command: convert input files into SQL scripts

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::prompt::Prompter;
use crate::config::AppConfig;
use crate::convert::{BatchReport, ConversionJob, convert_all};
use crate::export::Dialect;
use crate::import::discover_input_files;
use crate::models::{sanitize_identifier, table_name_from_path};

/// Arguments for the `generate` command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Explicit input files; when empty, `dir` is searched
    pub files: Vec<PathBuf>,
    /// Directory searched for input files
    pub dir: PathBuf,
    /// Database name (prompted when missing)
    pub database: Option<String>,
    /// Table name, only valid for a single input file
    pub table: Option<String>,
    /// Dialect override
    pub dialect: Option<Dialect>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Skip the confirmation and table name prompts
    pub yes: bool,
}

/// Handle the `generate` command.
///
/// Prompts are read from `prompter`; results go to stdout as each file finishes.
pub fn handle_generate<R: BufRead, W: Write>(
    args: &GenerateArgs,
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchReport, CliError> {
    let files = if args.files.is_empty() {
        discover_input_files(&args.dir).map_err(|source| CliError::Discovery {
            path: args.dir.clone(),
            source,
        })?
    } else {
        args.files.clone()
    };

    if files.is_empty() {
        println!("No input files found in {}", args.dir.display());
        return Ok(BatchReport::default());
    }

    if args.table.is_some() && files.len() > 1 {
        return Err(CliError::InvalidArgument(
            "--table can only be used with a single input file".to_string(),
        ));
    }

    eprintln!("Found input files:");
    for (i, file) in files.iter().enumerate() {
        eprintln!("{}. {}", i + 1, file.display());
    }

    let database = match &args.database {
        Some(name) => name.trim().to_string(),
        None => prompter.database_name(),
    };
    if database.is_empty() {
        return Err(CliError::InvalidArgument(
            "database name must not be empty".to_string(),
        ));
    }

    if !args.yes && !prompter.confirm("Process all these files?") {
        eprintln!("Operation cancelled");
        return Ok(BatchReport::default());
    }

    let dialect = args.dialect.unwrap_or(config.output.dialect);
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let jobs = files.into_iter().map(|file| {
        eprintln!("\nProcessing: {}", file.display());
        let default_table = table_name_from_path(&file);
        let table = match &args.table {
            Some(table) => sanitize_identifier(table),
            None if args.yes => default_table,
            None => prompter.table_name(&default_table),
        };
        ConversionJob::new(file, database.clone())
            .with_table(table)
            .with_dialect(dialect)
            .with_output_dir(output_dir.clone())
    });

    let report = convert_all(jobs, &config.inference, |input, result| match result {
        Ok(outcome) => println!("SQL file generated: {}", outcome.output.display()),
        Err(e) => println!("Error processing {}: {}", input.display(), e),
    });

    Ok(report)
}
