//! Output formatting for CLI

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CliError;
use crate::inference::ColumnDescriptor;

/// Output format of the `infer` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty JSON
    Json,
    /// YAML
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render inferred columns in the requested format
pub fn format_columns(
    columns: &[ColumnDescriptor],
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(format_columns_table(columns)),
        OutputFormat::Json => serde_json::to_string_pretty(columns)
            .map(|s| s + "\n")
            .map_err(|e| CliError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(columns).map_err(|e| CliError::Serialization(e.to_string()))
        }
    }
}

/// Aligned table with one line per column
pub fn format_columns_table(columns: &[ColumnDescriptor]) -> String {
    let types: Vec<String> = columns.iter().map(|c| c.declared_type.to_string()).collect();
    let name_width = columns
        .iter()
        .map(|c| c.name.len())
        .chain(std::iter::once("COLUMN".len()))
        .max()
        .unwrap_or(0);
    let type_width = types
        .iter()
        .map(String::len)
        .chain(std::iter::once("TYPE".len()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<name_width$}  {:<type_width$}  MONEY  DATE",
        "COLUMN", "TYPE"
    );
    for (column, sql_type) in columns.iter().zip(&types) {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<type_width$}  {:<5}  {}",
            column.name,
            sql_type,
            yes_no(column.is_money),
            yes_no(column.is_date)
        );
    }
    output
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
