//! Delimited-text parsing into raw row maps.
//!
//! The registry export is a plain comma split: first line is the header row,
//! fields never contain the delimiter, and there is no quoting or escaping.
//! That is a known limitation of the format, so quoting is disabled rather
//! than worked around.

use std::collections::BTreeMap;

use crate::IngestError;

/// One input line, keyed by trimmed column header. Transient: rows exist
/// only between parsing and normalization.
pub type RawRow = BTreeMap<String, String>;

/// Parses the export text into header-keyed rows.
///
/// Values are paired with headers by positional index. A row with fewer
/// values than headers gets empty strings for the missing trailing fields;
/// that is normal for this export, not an error. Blank lines (empty after
/// trimming) produce no row at all.
///
/// # Errors
///
/// Returns [`IngestError`] if the text has no header row or a record fails
/// to read.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_owned())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeader);
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;

        // A whitespace-only line parses as a single field that trims down to
        // nothing. Skip it entirely so it counts toward no index. A line of
        // bare delimiters is NOT blank and still produces a row.
        if record.len() <= 1 && record.get(0).unwrap_or("").trim().is_empty() {
            continue;
        }

        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or("").trim().to_owned();
            row.insert(header.clone(), value);
        }

        rows.push(row);
    }

    Ok(rows)
}
