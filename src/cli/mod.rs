//! CLI module for the sheet2sql binary

pub mod commands;
pub mod error;
pub mod output;
pub mod prompt;

pub use error::CliError;
