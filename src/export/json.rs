use crate::models::TimeEntry;
use std::path::Path;

/// Write the entries as formatted JSON, same shape as the data file.
pub fn write_entries(path: &Path, entries: &[TimeEntry]) -> crate::errors::AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
