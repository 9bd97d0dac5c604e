//! Configuration file support
//!
//! `sheet2sql.toml` holds inference tuning and output defaults:
//!
//! ```toml
//! [inference]
//! dateRatioThreshold = 0.9
//! moneyKeywords = ["price", "cost", "fee"]
//! moneyDecimal = { precision = 19, scale = 4 }
//!
//! [output]
//! dialect = "mysql"
//! outputDir = "sql"
//! ```
//!
//! Every key is optional. Command line flags take precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::export::Dialect;
use crate::inference::InferenceConfig;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sheet2sql.toml";

/// Error loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Parse { .. } => format!(
                "{}\n\nHint: Keys are camelCase, for example 'dateRatioThreshold' and 'outputDir'.",
                self
            ),
            _ => self.to_string(),
        }
    }
}

/// Output defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    /// Default dialect
    pub dialect: Dialect,
    /// Default directory for generated scripts
    pub output_dir: Option<PathBuf>,
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub inference: InferenceConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&content, path)
    }

    /// Load `sheet2sql.toml` from `dir` if it exists, defaults otherwise.
    pub fn load_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values the builder would otherwise clamp silently
    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.inference.date_ratio_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "dateRatioThreshold must be between 0.0 and 1.0, got {}",
                threshold
            )));
        }
        for (key, spec) in [
            ("moneyDecimal", self.inference.money_decimal),
            ("decimal", self.inference.decimal),
        ] {
            if spec.precision == 0 || spec.scale > spec.precision {
                return Err(ConfigError::Invalid(format!(
                    "{} needs 0 < precision and scale <= precision, got ({},{})",
                    key, spec.precision, spec.scale
                )));
            }
        }
        if self.inference.temporal.templates().is_empty() {
            return Err(ConfigError::Invalid(
                "temporal template list must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
