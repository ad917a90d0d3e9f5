//! Per-project aggregation over the stored entries. Rendering stays in the
//! CLI layer; this module only owns the numbers.

use crate::models::TimeEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTotal {
    pub project: String,
    pub total_seconds: u64,
    pub entry_count: usize,
}

impl ProjectTotal {
    /// Hours with two decimals, the report CSV's `total_hours` column.
    pub fn total_hours(&self) -> String {
        format!("{:.2}", self.total_seconds as f64 / 3600.0)
    }
}

/// Group entries by project name, in order of first appearance.
pub fn project_totals(entries: &[TimeEntry]) -> Vec<ProjectTotal> {
    let mut totals: Vec<ProjectTotal> = Vec::new();

    for entry in entries {
        match totals.iter_mut().find(|t| t.project == entry.project) {
            Some(t) => {
                t.total_seconds += entry.duration_seconds;
                t.entry_count += 1;
            }
            None => totals.push(ProjectTotal {
                project: entry.project.clone(),
                total_seconds: entry.duration_seconds,
                entry_count: 1,
            }),
        }
    }

    totals
}
