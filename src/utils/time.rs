//! Time utilities: formatting elapsed seconds, parsing HH:MM:SS durations
//! and the timestamp format used by the data file.

use chrono::NaiveDateTime;

/// Timestamp format of `start_time` / `stop_time` in the data file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Render a second count as `HH:MM:SS`.
pub fn format_seconds(total: u64) -> String {
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Parse a user-visible duration string back into seconds.
///
/// Accepts `HH:MM:SS` or `MM:SS` with minutes and seconds in `[0, 59]`.
/// A malformed string yields `0` rather than an error; user-edited duration
/// strings are lossy by contract and the second count is re-derived on save.
pub fn parse_duration_to_seconds(s: &str) -> u64 {
    let parts: Vec<&str> = s.split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [h, m, sec] => (*h, *m, *sec),
        [m, sec] => ("0", *m, *sec),
        _ => return 0,
    };

    let (Ok(h), Ok(m), Ok(sec)) = (
        h.trim().parse::<u64>(),
        m.trim().parse::<u64>(),
        sec.trim().parse::<u64>(),
    ) else {
        return 0;
    };

    if m > 59 || sec > 59 {
        return 0;
    }

    h * 3600 + m * 60 + sec
}
