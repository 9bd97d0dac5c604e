//! Data structures shared by the importers, the inference engine and the exporters

pub mod grid;
pub mod identifier;

pub use grid::{RawGrid, is_blank_row};
pub use identifier::{
    FALLBACK_IDENTIFIER, sanitize_headers, sanitize_identifier, table_name_from_path,
};
