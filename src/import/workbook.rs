use super::{normalize_cell, ImportError};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

/// Read the first sheet of an `.xlsx` workbook into one flat list.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<String>, ImportError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ImportError::Workbook(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| ImportError::Workbook(e.to_string()))?,
        None => return Ok(Vec::new()),
    };

    Ok(flatten_range(&range))
}

/// Row-major walk over every cell, keeping non-blank strings from any column.
pub fn flatten_range(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .flat_map(|row| row.iter())
        .filter_map(|cell| match cell {
            Data::String(s) => normalize_cell(s),
            _ => None,
        })
        .collect()
}
