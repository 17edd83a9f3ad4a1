use chrono::{DateTime, Utc};

use super::models::{CountdownSnapshot, Milestone, MilestoneCountdown, RemainingDuration};

/// Source of "now" for the countdown. Swapped out in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time left until `target` as seen from `now`, floored at zero.
pub fn remaining_until(target: DateTime<Utc>, now: DateTime<Utc>) -> RemainingDuration {
    let delta = target.signed_duration_since(now);
    RemainingDuration::from_millis(delta.num_milliseconds())
}

/// Holds the fixed milestones and turns them into snapshots.
#[derive(Debug, Clone, Default)]
pub struct CountdownService {
    milestones: Vec<Milestone>,
}

impl CountdownService {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self { milestones }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Computes every countdown against the same `now`.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        let entries = self
            .milestones
            .iter()
            .map(|milestone| MilestoneCountdown {
                label: milestone.label.clone(),
                accent: milestone.accent,
                target: milestone.target,
                remaining: remaining_until(milestone.target, now),
            })
            .collect();

        CountdownSnapshot {
            taken_at: now,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 4, 30, 0).unwrap()
    }

    fn sample_service() -> CountdownService {
        let now = base();
        CountdownService::new(vec![
            Milestone::new("Registration Opens", now - Duration::days(1)),
            Milestone::new("Registration Closes", now + Duration::seconds(59)).with_accent(true),
            Milestone::new("Event Day", now + Duration::milliseconds(90_061_500)),
        ])
    }

    #[test]
    fn snapshot_keeps_milestone_order_and_values() {
        let snapshot = sample_service().snapshot_at(base());
        let labels: Vec<&str> = snapshot.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Registration Opens", "Registration Closes", "Event Day"]
        );

        assert_eq!(snapshot.entries[0].remaining, RemainingDuration::ZERO);
        assert_eq!(
            snapshot.entries[1].remaining,
            RemainingDuration {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 59
            }
        );
        assert!(snapshot.entries[1].accent);
        assert_eq!(
            snapshot.entries[2].remaining,
            RemainingDuration {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(snapshot.taken_at, base());
    }

    #[test]
    fn snapshot_is_idempotent() {
        let service = sample_service();
        assert_eq!(service.snapshot_at(base()), service.snapshot_at(base()));
    }

    #[test]
    fn past_targets_stay_at_zero() {
        let service = sample_service();
        let much_later = base() + Duration::days(365);
        let snapshot = service.snapshot_at(much_later);
        assert!(snapshot.all_elapsed());
    }

    #[test]
    fn clock_is_consulted_by_callers() {
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(base());

        let snapshot = sample_service().snapshot_at(clock.now());
        assert_eq!(
            snapshot.get("Registration Closes").map(|e| e.remaining.seconds),
            Some(59)
        );
    }
}
