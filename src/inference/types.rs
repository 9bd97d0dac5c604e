//! Inferred column types

use serde::{Deserialize, Serialize};

use super::config::DecimalSpec;

/// Declared storage type of an inferred column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum SqlType {
    /// Free text
    Text,
    /// Whole numbers
    Integer,
    /// Fixed-point numbers
    Decimal {
        /// Total digits
        precision: u8,
        /// Digits after the decimal point
        scale: u8,
    },
    /// Calendar date
    Date,
    /// Date and time of day
    DateTime,
}

impl SqlType {
    /// Decimal type from a precision/scale pair
    pub fn decimal(spec: DecimalSpec) -> Self {
        SqlType::Decimal {
            precision: spec.precision,
            scale: spec.scale,
        }
    }

    /// Whether values of this type are written as quoted strings
    pub fn is_text(&self) -> bool {
        matches!(self, SqlType::Text)
    }

    /// Whether this is a date or datetime type
    pub fn is_temporal(&self) -> bool {
        matches!(self, SqlType::Date | SqlType::DateTime)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::Text => write!(f, "TEXT"),
            SqlType::Integer => write!(f, "INTEGER"),
            SqlType::Decimal { precision, scale } => write!(f, "DECIMAL({},{})", precision, scale),
            SqlType::Date => write!(f, "DATE"),
            SqlType::DateTime => write!(f, "DATETIME"),
        }
    }
}

/// Inferred metadata for one output column
///
/// Produced once per column by [`ColumnInferrer`](super::ColumnInferrer) and read by
/// the SQL exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Sanitized column identifier
    pub name: String,
    /// Declared storage type
    pub declared_type: SqlType,
    /// Header matched a money keyword
    pub is_money: bool,
    /// Column was classified as temporal
    pub is_date: bool,
}

impl ColumnDescriptor {
    /// Create a descriptor
    pub fn new(name: impl Into<String>, declared_type: SqlType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            is_money: false,
            is_date: declared_type.is_temporal(),
        }
    }

    /// Set the money flag
    pub fn with_money(mut self, is_money: bool) -> Self {
        self.is_money = is_money;
        self
    }
}

/// Value counts gathered while scanning a column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Non-empty values seen
    pub total: usize,
    /// Values classified as date or datetime
    pub date_count: usize,
    /// Values classified as datetime
    pub datetime_count: usize,
    /// At least one numeric value without a decimal point
    pub has_integer: bool,
    /// At least one numeric value with a decimal point
    pub has_float: bool,
    /// At least one value that is neither temporal nor numeric
    pub has_text: bool,
}

impl ColumnProfile {
    /// Share of non-empty values that are temporal, `None` for empty columns
    pub fn date_ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.date_count as f64 / self.total as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(SqlType::Text.to_string(), "TEXT");
        assert_eq!(SqlType::Integer.to_string(), "INTEGER");
        assert_eq!(
            SqlType::decimal(DecimalSpec::new(15, 2)).to_string(),
            "DECIMAL(15,2)"
        );
        assert_eq!(SqlType::DateTime.to_string(), "DATETIME");
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let column = ColumnDescriptor::new("signup_date", SqlType::Date);
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["name"], "signup_date");
        assert_eq!(json["declaredType"]["type"], "date");
        assert_eq!(json["isDate"], true);
        assert_eq!(json["isMoney"], false);
    }

    #[test]
    fn test_empty_profile_has_no_ratio() {
        assert_eq!(ColumnProfile::default().date_ratio(), None);
    }
}
