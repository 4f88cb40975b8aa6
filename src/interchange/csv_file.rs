use super::HEADERS;
use crate::errors::AppResult;
use crate::models::WireRecord;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::path::Path;

/// Read rows from a CSV file with a `date,attended,replaced,replacementDate` header.
pub fn read_csv(path: &Path) -> AppResult<Vec<WireRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let mut rows = Vec::new();
    for row in rdr.deserialize::<WireRecord>() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Write rows to CSV. The header is written even when there are no rows.
pub fn write_csv(path: &Path, rows: &[WireRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
