//! sheet2sql - turn CSV and Excel files into SQL scripts

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sheet2sql::cli::CliError;
use sheet2sql::cli::commands::{GenerateArgs, InferArgs, handle_generate, handle_infer};
use sheet2sql::cli::error::EXIT_FAILURES;
use sheet2sql::cli::output::OutputFormat;
use sheet2sql::cli::prompt::Prompter;
use sheet2sql::config::AppConfig;
use sheet2sql::export::Dialect;

#[derive(Parser)]
#[command(
    name = "sheet2sql",
    version,
    about = "Infer column types from CSV and Excel files and generate SQL scripts"
)]
struct Cli {
    /// Configuration file (defaults to ./sheet2sql.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one SQL script per input file
    Generate {
        /// Input files; when omitted, --dir is searched for .csv, .xlsx and .xls files
        files: Vec<PathBuf>,

        /// Directory to search for input files
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Database name (prompted when omitted)
        #[arg(long)]
        database: Option<String>,

        /// Table name (single input file only)
        #[arg(long)]
        table: Option<String>,

        /// SQL dialect
        #[arg(long, value_enum)]
        dialect: Option<Dialect>,

        /// Directory for generated scripts
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Skip confirmation and use default table names
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the inferred column types of a file
    Infer {
        /// Input CSV or Excel file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, CliError> {
    let config = match path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default(Path::new("."))?,
    };
    Ok(config)
}

/// Run the selected command, returning any text meant for stdout
fn run(cli: Cli) -> Result<Option<String>, CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            files,
            dir,
            database,
            table,
            dialect,
            output_dir,
            yes,
        } => {
            let args = GenerateArgs {
                files,
                dir,
                database,
                table,
                dialect,
                output_dir,
                yes,
            };
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stderr());
            let report = handle_generate(&args, &config, &mut prompter)?;
            if report.has_failures() {
                return Err(CliError::BatchFailed(report.failed.len()));
            }
            Ok(None)
        }
        Commands::Infer { file, format } => {
            handle_infer(&InferArgs { file, format }, &config).map(Some)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(Some(rendered)) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => Ok(ExitCode::SUCCESS),
        // each failed file was already reported on its own line
        Err(CliError::BatchFailed(_)) => Ok(ExitCode::from(EXIT_FAILURES)),
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
