use crate::errors::AppResult;
use crate::models::WireRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON array of rows.
pub fn read_json(path: &Path) -> AppResult<Vec<WireRecord>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[WireRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
