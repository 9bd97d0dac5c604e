//! Column type inference for tabular data
//!
//! Decides a SQL storage type for each column of a [`RawGrid`](crate::models::RawGrid)
//! by looking at every cell.
//!
//! ## Features
//!
//! - **Temporal detection** - Recognize dates and datetimes through an ordered template catalog
//! - **Numeric detection** - Separate integers from fractional values
//! - **Money heuristic** - Header keywords select a currency-friendly decimal shape
//! - **Canonical date literals** - Re-render recognized dates as `YYYY-MM-DD[ HH:MM:SS]`
//!
//! ## Example
//!
//! ```rust
//! use sheet2sql::inference::{ColumnInferrer, SqlType};
//!
//! let inferrer = ColumnInferrer::new();
//! let column = inferrer.infer("qty", ["5", "10", "7"]);
//! assert_eq!(column.declared_type, SqlType::Integer);
//! ```

mod config;
mod formats;
mod inferrer;
mod types;

pub use config::{DEFAULT_MONEY_KEYWORDS, DecimalSpec, InferenceConfig, InferenceConfigBuilder};
pub use formats::{
    SQL_DATE_FORMAT, SQL_DATETIME_FORMAT, TemplateFormat, Temporal, TemporalCatalog,
    TemporalTemplate, classify_temporal, format_for_sql,
};
pub use inferrer::{ColumnInferrer, infer_column, infer_columns};
pub use types::{ColumnDescriptor, ColumnProfile, SqlType};
