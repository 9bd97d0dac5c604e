//! CLI error type

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::convert::ConvertError;
use crate::import::ImportError;

/// Exit code for runs where at least one file failed
pub const EXIT_FAILURES: u8 = 1;
/// Exit code for argument and configuration errors
pub const EXIT_USAGE: u8 = 2;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot read directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: ImportError,
    },

    #[error("Error processing {}: {source}", path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Some files in a batch failed; each was already reported
    #[error("{0} file(s) could not be converted")]
    BatchFailed(usize),
}

impl CliError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(e) => e.user_message(),
            CliError::Conversion { path, source } => {
                format!("Error processing {}: {}", path.display(), source.user_message())
            }
            CliError::InvalidArgument(msg) => {
                format!("Invalid argument: {msg}\n\nHint: Run 'sheet2sql --help' for usage.")
            }
            _ => self.to_string(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArgument(_) | CliError::Config(_) | CliError::Discovery { .. } => {
                EXIT_USAGE
            }
            _ => EXIT_FAILURES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArgument("x".into()).exit_code(), EXIT_USAGE);
        assert_eq!(
            CliError::Config(ConfigError::Invalid("x".into())).exit_code(),
            EXIT_USAGE
        );
        assert_eq!(CliError::BatchFailed(2).exit_code(), EXIT_FAILURES);
    }

    #[test]
    fn test_conversion_message_names_file() {
        let err = CliError::Conversion {
            path: PathBuf::from("book.xlsx"),
            source: ConvertError::Import(ImportError::EmptySheet),
        };
        assert_eq!(err.to_string(), "Error processing book.xlsx: sheet is empty");
    }
}
