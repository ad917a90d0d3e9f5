use crate::core::report::ProjectTotal;
use crate::models::TimeEntry;
use crate::utils::time::format_timestamp;
use csv::Writer;
use std::path::Path;

/// Header of the entries CSV; the column order is the import/export contract.
/// The internal `id` is intentionally not exported, import mints fresh ones.
pub const ENTRY_HEADERS: [&str; 8] = [
    "project",
    "memo",
    "start_time",
    "stop_time",
    "duration",
    "duration_seconds",
    "invoiced",
    "project_id",
];

/// Write the entries to a CSV file.
pub fn write_entries(path: &Path, entries: &[TimeEntry]) -> crate::errors::AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(ENTRY_HEADERS)?;
    for entry in entries {
        wtr.write_record(&[
            entry.project.clone(),
            entry.memo.clone(),
            format_timestamp(&entry.start_time),
            format_timestamp(&entry.stop_time),
            entry.duration.clone(),
            entry.duration_seconds.to_string(),
            entry.invoiced.to_string(),
            entry.project_id.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the per-project report to a CSV file.
pub fn write_report(path: &Path, totals: &[ProjectTotal]) -> crate::errors::AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["project", "total_hours", "total_seconds", "entry_count"])?;
    for total in totals {
        wtr.write_record(&[
            total.project.clone(),
            total.total_hours(),
            total.total_seconds.to_string(),
            total.entry_count.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
