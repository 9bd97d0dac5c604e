//! Date and datetime detection for cell values
//!
//! A single ordered [`TemporalCatalog`] drives both classification and SQL literal
//! formatting, so any value that parses as a date formats the same way it was
//! classified. Datetime templates come first in the catalog; the first template that
//! consumes the whole value wins.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical rendering for datetime literals
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical rendering for date literals
pub const SQL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Temporal classification of a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Temporal {
    /// Not a recognizable date
    None,
    /// Calendar date without a time component
    Date,
    /// Date with a time component
    DateTime,
}

impl Temporal {
    /// True for both dates and datetimes
    pub fn is_date(&self) -> bool {
        !matches!(self, Temporal::None)
    }

    /// True only for datetimes
    pub fn is_datetime(&self) -> bool {
        matches!(self, Temporal::DateTime)
    }

    /// `(is_date, is_datetime)` pair
    pub fn flags(&self) -> (bool, bool) {
        (self.is_date(), self.is_datetime())
    }
}

impl std::fmt::Display for Temporal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temporal::None => write!(f, "none"),
            Temporal::Date => write!(f, "date"),
            Temporal::DateTime => write!(f, "date-time"),
        }
    }
}

/// How a template reads a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "pattern")]
pub enum TemplateFormat {
    /// A `chrono` strftime pattern that must consume the whole value
    Strftime(String),
    /// RFC 3339 timestamp with a UTC offset
    Rfc3339,
}

/// One entry of the temporal catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalTemplate {
    /// Parse format
    pub format: TemplateFormat,
    /// Whether a match carries a time component
    pub is_datetime: bool,
}

impl TemporalTemplate {
    /// Datetime template from a strftime pattern
    pub fn datetime(pattern: &str) -> Self {
        Self {
            format: TemplateFormat::Strftime(pattern.to_string()),
            is_datetime: true,
        }
    }

    /// Date-only template from a strftime pattern
    pub fn date(pattern: &str) -> Self {
        Self {
            format: TemplateFormat::Strftime(pattern.to_string()),
            is_datetime: false,
        }
    }

    /// RFC 3339 datetime template
    pub fn rfc3339() -> Self {
        Self {
            format: TemplateFormat::Rfc3339,
            is_datetime: true,
        }
    }

    /// Parse a trimmed value, returning its wall-clock date and time
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let parsed = match (&self.format, self.is_datetime) {
            (TemplateFormat::Rfc3339, _) => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local()),
            (TemplateFormat::Strftime(pattern), true) => {
                NaiveDateTime::parse_from_str(value, pattern).ok()
            }
            (TemplateFormat::Strftime(pattern), false) => NaiveDate::parse_from_str(value, pattern)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
        }?;

        // %Y accepts short years such as "24"; only four-digit years count
        (1000..=9999).contains(&parsed.year()).then_some(parsed)
    }
}

// `%.f` matches an optional fraction, so exported timestamps such as
// "2024-01-05 10:30:00.123" parse; rendering drops it
const DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
];

const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%e-%b-%y",
    "%d-%b-%y",
    "%e-%b-%Y",
    "%d-%b-%Y",
    "%b %e, %Y",
    "%B %e, %Y",
    "%e %b %Y",
    "%e %B %Y",
    "%Y/%m/%d",
    "%m.%d.%Y",
    "%d.%m.%Y",
];

// Shapes that look like dates even when no template parses them
static DATE_SHAPE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{1,2}[-/]\d{1,2}[-/]\d{2,4}$",
        r"^\d{4}[-/]\d{1,2}[-/]\d{1,2}$",
        r"^\d{1,2}[-\s][A-Za-z]{3}[-\s]\d{2,4}$",
        r"^[A-Za-z]{3}[-\s]\d{1,2}[-\s,]\d{2,4}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATETIME_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\s+\d{1,2}:\d{2}(:\d{2}(\.\d+)?)?$").unwrap());

static DEFAULT_CATALOG: Lazy<TemporalCatalog> = Lazy::new(TemporalCatalog::default);

/// Ordered list of date/datetime templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TemporalTemplate>", into = "Vec<TemporalTemplate>")]
pub struct TemporalCatalog {
    templates: Vec<TemporalTemplate>,
}

impl From<Vec<TemporalTemplate>> for TemporalCatalog {
    fn from(templates: Vec<TemporalTemplate>) -> Self {
        Self::new(templates)
    }
}

impl From<TemporalCatalog> for Vec<TemporalTemplate> {
    fn from(catalog: TemporalCatalog) -> Self {
        catalog.templates
    }
}

impl Default for TemporalCatalog {
    fn default() -> Self {
        let mut templates: Vec<TemporalTemplate> = DATETIME_PATTERNS
            .iter()
            .map(|p| TemporalTemplate::datetime(p))
            .collect();
        templates.push(TemporalTemplate::rfc3339());
        templates.extend(DATE_PATTERNS.iter().map(|p| TemporalTemplate::date(p)));
        Self { templates }
    }
}

impl TemporalCatalog {
    /// Build a catalog from templates. Datetime templates are moved ahead of
    /// date-only templates, keeping their relative order.
    pub fn new(templates: Vec<TemporalTemplate>) -> Self {
        let (mut ordered, date_only): (Vec<_>, Vec<_>) =
            templates.into_iter().partition(|t| t.is_datetime);
        ordered.extend(date_only);
        Self { templates: ordered }
    }

    /// Templates in match order
    pub fn templates(&self) -> &[TemporalTemplate] {
        &self.templates
    }

    /// Append a template, keeping datetime templates ahead of date-only ones
    pub fn push(&mut self, template: TemporalTemplate) {
        if template.is_datetime {
            let at = self
                .templates
                .iter()
                .position(|t| !t.is_datetime)
                .unwrap_or(self.templates.len());
            self.templates.insert(at, template);
        } else {
            self.templates.push(template);
        }
    }

    /// First template match for a value, as `(timestamp, is_datetime)`
    pub fn parse(&self, value: &str) -> Option<(NaiveDateTime, bool)> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        self.templates
            .iter()
            .find_map(|t| t.parse(value).map(|ts| (ts, t.is_datetime)))
    }

    /// Classify a value as date, datetime or neither.
    ///
    /// Templates are tried first; values no template accepts are checked against
    /// loose date shapes, then against a numeric date followed by a time.
    pub fn classify(&self, value: &str) -> Temporal {
        let value = value.trim();
        if value.is_empty() {
            return Temporal::None;
        }

        if let Some((_, is_datetime)) = self.parse(value) {
            return if is_datetime {
                Temporal::DateTime
            } else {
                Temporal::Date
            };
        }

        if DATE_SHAPE_REGEXES.iter().any(|re| re.is_match(value)) {
            return Temporal::Date;
        }

        if DATETIME_SHAPE_REGEX.is_match(value) {
            return Temporal::DateTime;
        }

        Temporal::None
    }

    /// Render a value as a canonical SQL date or datetime literal body.
    ///
    /// Values no template parses are returned trimmed but otherwise unchanged.
    pub fn format_for_sql(&self, value: &str) -> String {
        match self.parse(value) {
            Some((ts, true)) => ts.format(SQL_DATETIME_FORMAT).to_string(),
            Some((ts, false)) => ts.format(SQL_DATE_FORMAT).to_string(),
            None => value.trim().to_string(),
        }
    }
}

/// Classify a value against the default catalog
pub fn classify_temporal(value: &str) -> Temporal {
    DEFAULT_CATALOG.classify(value)
}

/// Format a value against the default catalog
pub fn format_for_sql(value: &str) -> String {
    DEFAULT_CATALOG.format_for_sql(value)
}
