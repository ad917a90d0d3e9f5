use chrono::NaiveDateTime;

/// The value a stopped timer emits: one completed tracking session.
/// The caller combines it with project/memo metadata into a [`TimeEntry`]
/// before persisting it.
///
/// [`TimeEntry`]: super::TimeEntry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub start_time: NaiveDateTime,
    pub stop_time: NaiveDateTime,
    /// Seconds spent Running, paused intervals excluded.
    pub duration_seconds: u64,
}
