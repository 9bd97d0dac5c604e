//! Excel workbook reader (first worksheet only)

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use chrono::NaiveTime;
use tracing::debug;

use super::ImportError;
use crate::inference::{SQL_DATE_FORMAT, SQL_DATETIME_FORMAT};
use crate::models::{RawGrid, sanitize_headers};

/// Read the first worksheet of an `.xlsx` or `.xls` workbook.
///
/// The first used row is the header row, everything below it is data.
pub fn read_workbook(path: &Path) -> Result<RawGrid, ImportError> {
    let mut workbook = open_workbook_auto(path)?;

    if let Some(name) = workbook.sheet_names().first() {
        debug!(path = %path.display(), sheet = %name, "Using first worksheet");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheets)??;

    grid_from_range(&range)
}

/// Convert a worksheet range into a grid.
///
/// Ranges only cover the used area of a sheet. The first used row is the header
/// row; leading empty columns are restored from the range start so that blank
/// header positions keep their `column_{n}` numbering.
pub fn grid_from_range(range: &Range<Data>) -> Result<RawGrid, ImportError> {
    let start_col = match range.start() {
        Some((_, col)) if !range.is_empty() => col,
        _ => return Err(ImportError::EmptySheet),
    };

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(range.height());
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }

    Ok(grid_from_rows(rows))
}

/// Split sheet rows into headers and data rows.
///
/// The header row ends at its last non-blank cell; data cells past that point are
/// never read.
pub fn grid_from_rows(mut rows: Vec<Vec<String>>) -> RawGrid {
    if rows.is_empty() {
        return RawGrid::default();
    }
    let mut header_cells = rows.remove(0);
    let used = header_cells
        .iter()
        .rposition(|cell| !cell.trim().is_empty())
        .map_or(0, |i| i + 1);
    header_cells.truncate(used);

    RawGrid::new(sanitize_headers(&header_cells), rows)
}

/// Cell text as the sheet would display it, with dates rendered canonically
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => dt.format(SQL_DATE_FORMAT).to_string(),
            Some(dt) => dt.format(SQL_DATETIME_FORMAT).to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}
