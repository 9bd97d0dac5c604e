//! Column type inference engine

use tracing::debug;

use super::config::InferenceConfig;
use super::types::{ColumnDescriptor, ColumnProfile, SqlType};
use crate::models::{RawGrid, sanitize_headers, sanitize_identifier};

/// Column type inference engine
///
/// Scans every value of a column and picks one declared SQL type. Columns are
/// inferred independently of each other.
#[derive(Debug, Clone, Default)]
pub struct ColumnInferrer {
    config: InferenceConfig,
}

impl ColumnInferrer {
    /// Create a new inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Count value classes for one column.
    ///
    /// Empty and whitespace-only values are ignored. Temporal values are not
    /// checked for numeric content.
    pub fn profile<'a, I>(&self, values: I) -> ColumnProfile
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut profile = ColumnProfile::default();

        for value in values {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            profile.total += 1;

            let temporal = self.config.temporal.classify(value);
            if temporal.is_date() {
                profile.date_count += 1;
                if temporal.is_datetime() {
                    profile.datetime_count += 1;
                }
                continue;
            }

            if value.parse::<f64>().is_ok() {
                if value.contains('.') {
                    profile.has_float = true;
                } else {
                    profile.has_integer = true;
                }
            } else {
                profile.has_text = true;
            }
        }

        profile
    }

    /// Pick a declared type for a profiled column.
    ///
    /// Rules, first match wins: mostly temporal values, any text, any fraction or a
    /// money header, any integer, and finally text for columns with no values.
    pub fn decide(&self, profile: &ColumnProfile, is_money: bool) -> SqlType {
        if let Some(ratio) = profile.date_ratio()
            && ratio > self.config.date_ratio_threshold
        {
            return if profile.datetime_count > profile.date_count / 2 {
                SqlType::DateTime
            } else {
                SqlType::Date
            };
        }

        if profile.has_text {
            SqlType::Text
        } else if profile.has_float || is_money {
            if is_money {
                SqlType::decimal(self.config.money_decimal)
            } else {
                SqlType::decimal(self.config.decimal)
            }
        } else if profile.has_integer {
            SqlType::Integer
        } else {
            SqlType::Text
        }
    }

    /// Infer the descriptor for one column
    pub fn infer<'a, I>(&self, header: &str, values: I) -> ColumnDescriptor
    where
        I: IntoIterator<Item = &'a str>,
    {
        let name = sanitize_identifier(header);
        let is_money = self.config.is_money_header(&name);
        let profile = self.profile(values);
        let declared_type = self.decide(&profile, is_money);

        debug!(
            column = %name,
            total = profile.total,
            dates = profile.date_count,
            datetimes = profile.datetime_count,
            text = profile.has_text,
            float = profile.has_float,
            integer = profile.has_integer,
            %declared_type,
            "Inferred column type"
        );

        ColumnDescriptor {
            name,
            declared_type,
            is_money,
            is_date: declared_type.is_temporal(),
        }
    }

    /// Infer descriptors for every column of a grid, in header order
    pub fn infer_grid(&self, grid: &RawGrid) -> Vec<ColumnDescriptor> {
        grid.headers
            .iter()
            .enumerate()
            .map(|(i, header)| self.infer(header, grid.column_values(i)))
            .collect()
    }
}

/// Infer one column with the default configuration
pub fn infer_column<'a, I>(header: &str, values: I) -> ColumnDescriptor
where
    I: IntoIterator<Item = &'a str>,
{
    ColumnInferrer::new().infer(header, values)
}

/// Infer all columns of a header row and data rows with the default configuration.
///
/// Headers may be raw; blank ones are named `column_{n}` by position. Rows shorter
/// than the header count as having empty trailing cells.
pub fn infer_columns(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnDescriptor> {
    let inferrer = ColumnInferrer::new();
    sanitize_headers(headers)
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let values = rows
                .iter()
                .map(move |row| row.get(i).map(String::as_str).unwrap_or(""));
            inferrer.infer(header, values)
        })
        .collect()
}
