use super::{Invoiced, SessionSummary};
use crate::utils::time::format_seconds;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted record of a completed session.
///
/// Field names and the `YYYY-MM-DD HH:MM:SS` timestamp format are the data
/// file contract. `duration_seconds` is the single source of truth for the
/// length of the session; the `duration` display string is re-derived from it
/// on every save and never trusted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Stable synthetic identifier minted at creation. Entries loaded from
    /// older files without one get an id backfilled; all mutations address
    /// entries by id, never by list position.
    #[serde(default)]
    pub id: String,

    pub project: String,

    #[serde(default)]
    pub memo: String,

    #[serde(with = "timestamp_format")]
    pub start_time: NaiveDateTime,

    #[serde(with = "timestamp_format")]
    pub stop_time: NaiveDateTime,

    /// `HH:MM:SS` display form of `duration_seconds`.
    #[serde(default)]
    pub duration: String,

    pub duration_seconds: u64,

    #[serde(default)]
    pub invoiced: Invoiced,

    #[serde(default)]
    pub project_id: Option<String>,
}

impl TimeEntry {
    /// Build an entry from a stopped session. The id is left empty; the
    /// record store assigns one on append.
    pub fn from_session(
        summary: &SessionSummary,
        project: &str,
        memo: &str,
        project_id: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            project: project.trim().to_string(),
            memo: memo.trim().to_string(),
            start_time: summary.start_time,
            stop_time: summary.stop_time,
            duration: format_seconds(summary.duration_seconds),
            duration_seconds: summary.duration_seconds,
            invoiced: Invoiced::No,
            project_id,
        }
    }

    /// Re-derive the display duration from the second count. Called before
    /// every save so a stale or hand-edited `duration` string never survives.
    pub fn normalize(&mut self) {
        self.duration = format_seconds(self.duration_seconds);
    }
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamps of the data file.
pub mod timestamp_format {
    use crate::utils::time::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&t.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}
