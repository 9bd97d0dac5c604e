//! Configuration for column type inference

use serde::{Deserialize, Serialize};

use super::formats::TemporalCatalog;

/// Header keywords that mark a column as holding currency amounts.
pub const DEFAULT_MONEY_KEYWORDS: &[&str] = &[
    "price", "cost", "amount", "fee", "total", "pay", "salary", "wage", "revenue", "dollar", "usd",
    "eur", "gbp",
];

/// Precision and scale of a `DECIMAL(p,s)` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalSpec {
    /// Total number of digits
    pub precision: u8,
    /// Digits after the decimal point
    pub scale: u8,
}

impl DecimalSpec {
    /// Create a decimal spec; `scale` is capped at `precision`
    pub const fn new(precision: u8, scale: u8) -> Self {
        let scale = if scale > precision { precision } else { scale };
        Self { precision, scale }
    }
}

/// Configuration for column type inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Share of non-empty values that must be dates for a column to become temporal.
    /// The comparison is strict: the ratio must exceed this value (0.0 - 1.0)
    pub date_ratio_threshold: f64,

    /// Case-insensitive substrings that flag a header as a money column
    pub money_keywords: Vec<String>,

    /// Decimal shape used for money columns
    pub money_decimal: DecimalSpec,

    /// Decimal shape used for other fractional columns
    pub decimal: DecimalSpec,

    /// Ordered date/datetime templates shared by classification and formatting
    pub temporal: TemporalCatalog,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            date_ratio_threshold: 0.8,
            money_keywords: DEFAULT_MONEY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            money_decimal: DecimalSpec::new(15, 2),
            decimal: DecimalSpec::new(20, 8),
            temporal: TemporalCatalog::default(),
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// Whether a header name matches one of the money keywords
    pub fn is_money_header(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.money_keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && lower.contains(&keyword.to_lowercase()))
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the date ratio threshold
    pub fn date_ratio_threshold(mut self, threshold: f64) -> Self {
        self.config.date_ratio_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Replace the money keyword list
    pub fn money_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.money_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add a money keyword to the current list
    pub fn add_money_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.money_keywords.push(keyword.into());
        self
    }

    /// Set the decimal shape for money columns
    pub fn money_decimal(mut self, precision: u8, scale: u8) -> Self {
        self.config.money_decimal = DecimalSpec::new(precision, scale);
        self
    }

    /// Set the decimal shape for non-money fractional columns
    pub fn decimal(mut self, precision: u8, scale: u8) -> Self {
        self.config.decimal = DecimalSpec::new(precision, scale);
        self
    }

    /// Replace the temporal template catalog
    pub fn temporal(mut self, catalog: TemporalCatalog) -> Self {
        self.config.temporal = catalog;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
