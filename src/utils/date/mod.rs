// Date utility functions
// Wall-clock parsing and display in the event's time zone

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Format accepted for milestone targets in the settings file.
pub const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalTimeError {
    Malformed(String),
    /// The wall-clock time falls into a DST gap in the given zone.
    Nonexistent(String),
}

/// Parse `2025-09-08T10:00:00` as wall-clock time in `tz`.
///
/// Ambiguous times (DST fold) resolve to the earlier instant.
pub fn parse_local_instant(text: &str, tz: Tz) -> Result<DateTime<Utc>, LocalTimeError> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), TARGET_FORMAT)
        .map_err(|_| LocalTimeError::Malformed(text.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| LocalTimeError::Nonexistent(text.to_string()))
}

/// "September 8, 2025 - 10:00 AM"
pub fn format_target(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%B %-d, %Y - %-I:%M %p")
        .to_string()
}

/// "08 Sep 2025 10:00 IST"
pub fn format_target_short(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%d %b %Y %H:%M %Z")
        .to_string()
}
