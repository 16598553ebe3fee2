//! CSV loading for game result logs

use std::path::Path;

use crate::{error::Result, table::RawTable};

/// Load a game results CSV into a [`RawTable`].
///
/// Header names are whitespace-trimmed before any other processing because
/// downstream logic matches columns by exact name. Rows are read flexibly:
/// the shifted producer is known to emit ragged records, and a short row is
/// data with missing cells, not a parse failure.
///
/// # Errors
///
/// Any I/O or CSV parse failure is returned to the caller; loading is
/// all-or-nothing and never yields a partial table.
pub fn load(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}
