// Test fixtures - reusable test data
// Provides consistent instants and milestones across all test files
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Sep 1, 2025 at 09:30 IST, a week before registration opens
    pub fn week_before_opening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 4, 0, 0).unwrap()
    }

    /// Sep 18, 2025 at 23:59:59 IST, the registration deadline
    pub fn registration_deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 18, 18, 29, 59).unwrap()
    }

    /// Sep 19, 2025 at 10:00 IST, the event itself
    pub fn event_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 19, 4, 30, 0).unwrap()
    }

    /// Well after the summit is over
    pub fn after_event() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()
    }
}

/// Sample milestones for testing
pub mod milestones {
    use super::*;
    use nexus_summit::services::countdown::Milestone;

    /// The three summit milestones resolved from their Kolkata wall-clock times
    pub fn summit() -> Vec<Milestone> {
        vec![
            Milestone::new(
                "Registration Opens",
                Utc.with_ymd_and_hms(2025, 9, 8, 4, 30, 0).unwrap(),
            ),
            Milestone::new("Registration Closes", instants::registration_deadline())
                .with_accent(true),
            Milestone::new("Event Day", instants::event_start()),
        ]
    }
}

/// Sample settings files for testing
pub mod toml_files {
    /// A complete settings file with two milestones
    pub const CUSTOM: &str = r#"
timezone = "Europe/London"
theme = "light"
tick_interval_ms = 500
registration_url = "https://example.org/register"
guide_video_url = "https://example.org/guide.mp4"

[[milestones]]
label = "Doors Open"
target = "2026-03-01T09:00:00"

[[milestones]]
label = "Keynote"
target = "2026-03-01T10:30:00"
accent = true
"#;

    /// Only overrides the zone; everything else falls back to defaults
    pub const ZONE_ONLY: &str = r#"timezone = "America/New_York""#;
}
