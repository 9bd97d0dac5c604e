//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::ImportError;
use crate::models::{RawGrid, sanitize_headers};

/// Read a CSV file. The first record is the header row.
pub fn read_csv(path: &Path) -> Result<RawGrid, ImportError> {
    let file = File::open(path)?;
    read_csv_from(file)
}

/// Read CSV data from any reader.
///
/// Records may have differing lengths; short rows are kept as they are and read as
/// empty trailing cells later on. Cells are not trimmed.
pub fn read_csv_from<R: Read>(reader: R) -> Result<RawGrid, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record?,
        None => return Err(ImportError::EmptyFile),
    };
    let headers = sanitize_headers(&header_record.iter().collect::<Vec<_>>());

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawGrid::new(headers, rows))
}
