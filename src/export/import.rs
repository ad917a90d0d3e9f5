//! CSV import of time entries.
//!
//! The reader is tolerant by contract: rows missing `invoiced` or
//! `project_id` default to `"No"` / none, `duration_seconds` falls back to
//! the lossy duration-string parse, and rows without a project or a parsable
//! `start_time` are skipped rather than failing the whole import.

use crate::errors::AppResult;
use crate::models::{Invoiced, TimeEntry};
use crate::utils::time::{format_seconds, parse_duration_to_seconds, parse_timestamp};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

pub struct ImportOutcome {
    pub entries: Vec<TimeEntry>,
    pub skipped: usize,
}

pub fn read_entries(path: &Path) -> AppResult<ImportOutcome> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    // Column positions by header name, so partial header sets import fine.
    let columns: HashMap<String, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_string(), i))
        .collect();

    let field = |record: &csv::StringRecord, name: &str| -> Option<String> {
        columns
            .get(name)
            .and_then(|&i| record.get(i))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let mut entries = Vec::new();
    let mut skipped = 0;

    for record in rdr.records() {
        let record = record?;

        let project = field(&record, "project");
        let start = field(&record, "start_time").and_then(|s| parse_timestamp(&s));

        let (Some(project), Some(start_time)) = (project, start) else {
            skipped += 1;
            continue;
        };

        let stop_time = field(&record, "stop_time")
            .and_then(|s| parse_timestamp(&s))
            .unwrap_or(start_time);

        // Seconds are the source of truth; an absent or unparsable count
        // falls back to the display string, which itself falls back to 0.
        let duration_seconds = match field(&record, "duration_seconds")
            .and_then(|s| s.parse::<u64>().ok())
        {
            Some(secs) => secs,
            None => field(&record, "duration")
                .map(|d| parse_duration_to_seconds(&d))
                .unwrap_or(0),
        };

        entries.push(TimeEntry {
            id: String::new(),
            project,
            memo: field(&record, "memo").unwrap_or_default(),
            start_time,
            stop_time,
            duration: format_seconds(duration_seconds),
            duration_seconds,
            invoiced: field(&record, "invoiced")
                .map(|v| Invoiced::from_str_lenient(&v))
                .unwrap_or(Invoiced::No),
            project_id: field(&record, "project_id"),
        });
    }

    Ok(ImportOutcome { entries, skipped })
}
