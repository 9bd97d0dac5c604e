//! SQL identifier normalization
//!
//! Header cells and file names arrive as free text. These helpers turn them into
//! lowercase, underscore-separated identifiers that can be used unquoted in most
//! SQL engines.

use std::path::Path;

/// Identifier used when sanitization leaves nothing behind.
pub const FALLBACK_IDENTIFIER: &str = "column";

/// Normalize arbitrary text into a SQL identifier.
///
/// Trims surrounding whitespace, replaces spaces, hyphens and periods with `_`,
/// drops parentheses and lowercases the result. Returns [`FALLBACK_IDENTIFIER`]
/// when the input is empty after cleaning.
///
/// # Example
///
/// ```rust
/// use sheet2sql::models::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier(" Unit Price (USD) "), "unit_price_usd");
/// assert_eq!(sanitize_identifier("   "), "column");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| match c {
            ' ' | '-' | '.' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        cleaned
    }
}

/// Derive a default table name from an input file path.
///
/// Uses the file stem (name without the final extension) and runs it through
/// [`sanitize_identifier`].
pub fn table_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_identifier(&stem)
}

/// Sanitize a row of header cells.
///
/// Blank cells become `column_{n}` where `n` is the one-based position; every other
/// cell goes through [`sanitize_identifier`].
pub fn sanitize_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header = header.as_ref();
            if header.trim().is_empty() {
                format!("column_{}", i + 1)
            } else {
                sanitize_identifier(header)
            }
        })
        .collect()
}
