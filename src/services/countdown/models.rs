use std::fmt;

use chrono::{DateTime, Utc};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Whole days, hours, minutes and seconds left until a target instant.
///
/// Always floored, never negative. A target that has passed reports
/// [`RemainingDuration::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a millisecond gap. Non-positive gaps collapse to zero.
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (delta_ms / MILLIS_PER_DAY) as u64,
            hours: ((delta_ms % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u8,
            minutes: ((delta_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((delta_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// A named target instant the page counts down to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub label: String,
    pub target: DateTime<Utc>,
    /// Highlighted card on the timeline.
    pub accent: bool,
}

impl Milestone {
    pub fn new(label: impl Into<String>, target: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            target,
            accent: false,
        }
    }

    pub fn with_accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }
}

/// One milestone's countdown as of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneCountdown {
    pub label: String,
    pub accent: bool,
    pub target: DateTime<Utc>,
    pub remaining: RemainingDuration,
}

/// Every tracked countdown computed at the same instant, in milestone order.
///
/// Snapshots are replaced wholesale on each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub taken_at: DateTime<Utc>,
    pub entries: Vec<MilestoneCountdown>,
}

impl CountdownSnapshot {
    pub fn get(&self, label: &str) -> Option<&MilestoneCountdown> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn all_elapsed(&self) -> bool {
        self.entries.iter().all(|entry| entry.remaining.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(90_061_500, RemainingDuration { days: 1, hours: 1, minutes: 1, seconds: 1 } ; "one of each, half second floored")]
    #[test_case(59_000, RemainingDuration { days: 0, hours: 0, minutes: 0, seconds: 59 } ; "under a minute")]
    #[test_case(-5_000, RemainingDuration::ZERO ; "already passed")]
    #[test_case(0, RemainingDuration::ZERO ; "exactly now")]
    #[test_case(999, RemainingDuration::ZERO ; "sub second")]
    #[test_case(86_400_000 * 400, RemainingDuration { days: 400, hours: 0, minutes: 0, seconds: 0 } ; "days are unbounded")]
    fn decomposes_millis(delta_ms: i64, expected: RemainingDuration) {
        assert_eq!(RemainingDuration::from_millis(delta_ms), expected);
    }

    #[test]
    fn total_seconds_recombines_fields() {
        let remaining = RemainingDuration {
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5,
        };
        assert_eq!(remaining.total_seconds(), 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
    }

    #[test]
    fn display_pads_sub_day_fields() {
        let remaining = RemainingDuration::from_millis(90_061_500);
        assert_eq!(remaining.to_string(), "1d 01h 01m 01s");
        assert_eq!(RemainingDuration::ZERO.to_string(), "0d 00h 00m 00s");
    }
}
