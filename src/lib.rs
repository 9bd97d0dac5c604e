//! sheet2sql - Infer relational schemas from spreadsheets and generate SQL
//!
//! Provides:
//! - CSV and Excel (XLSX/XLS) import into a raw grid of cell text
//! - Column type inference (dates, datetimes, integers, decimals, money, text)
//! - SQL script generation for generic SQL, MySQL and SQL Server
//! - A batch driver that converts many files with per-file error isolation
//!
//! # Example
//!
//! ```rust
//! use sheet2sql::{Dialect, SQLExporter, infer_columns};
//!
//! let headers = vec!["Qty".to_string(), "Unit Price".to_string()];
//! let rows = vec![vec!["5".to_string(), "9.99".to_string()]];
//!
//! let columns = infer_columns(&headers, &rows);
//! let sql = SQLExporter::new(Dialect::MySql)
//!     .export("orders", "shop", &columns, &rows)
//!     .unwrap()
//!     .content;
//! assert!(sql.contains("`unit_price` DECIMAL(15,2)"));
//! ```

pub mod convert;
pub mod export;
pub mod import;
pub mod inference;
pub mod models;

#[cfg(feature = "config-file")]
pub mod config;

#[cfg(feature = "cli")]
pub mod cli;

pub use convert::{
    BatchReport, ConversionJob, ConversionOutcome, ConvertError, convert_all, convert_file,
};
pub use export::{Dialect, ExportError, ExportResult, ExportStats, SQLExporter};
pub use import::{ImportError, InputFormat, discover_input_files, read_grid};
pub use inference::{
    ColumnDescriptor, ColumnInferrer, InferenceConfig, SqlType, Temporal, TemporalCatalog,
    classify_temporal, format_for_sql, infer_column, infer_columns,
};
pub use models::{RawGrid, sanitize_identifier};

#[cfg(feature = "config-file")]
pub use config::{AppConfig, ConfigError};
