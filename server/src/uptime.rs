use std::time::{Duration, Instant};

use time::OffsetDateTime;

/// The moment the process started serving.
///
/// Captured once at startup and handed to every handler through [`crate::AppState`].
/// Elapsed time is measured against the monotonic clock, so uptime never goes
/// backwards even if the wall clock is adjusted.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    pub utc: OffsetDateTime,
    instant: Instant,
}

impl StartTime {
    pub fn now() -> Self {
        Self {
            utc: OffsetDateTime::now_utc(),
            instant: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Uptime {
        self.uptime_at(Instant::now())
    }

    pub fn uptime_at(&self, now: Instant) -> Uptime {
        Uptime::from(now.saturating_duration_since(self.instant))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

impl Uptime {
    pub fn from_seconds(seconds: u64) -> Self {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;

        Self {
            seconds,
            human: format!(
                "{}, {}",
                pluralize(hours, "hour"),
                pluralize(minutes, "minute")
            ),
        }
    }
}

impl From<Duration> for Uptime {
    fn from(elapsed: Duration) -> Self {
        Self::from_seconds(elapsed.as_secs())
    }
}

fn pluralize(count: u64, unit: &str) -> String {
    match count {
        1 => format!("1 {unit}"),
        n => format!("{n} {unit}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hour_one_minute_one_second() {
        let start = StartTime::now();
        let uptime = start.uptime_at(start.instant + Duration::from_secs(3661));
        assert_eq!(uptime.seconds, 3661);
        assert_eq!(uptime.human, "1 hour, 1 minute");
    }

    #[test]
    fn clock_behind_start_reads_zero() {
        let start = StartTime::now();
        let earlier = start.instant.checked_sub(Duration::from_secs(1));
        if let Some(earlier) = earlier {
            assert_eq!(start.uptime_at(earlier).seconds, 0);
        }
    }

    #[test]
    fn zero_is_plural() {
        assert_eq!(Uptime::from_seconds(0).human, "0 hours, 0 minutes");
        assert_eq!(Uptime::from_seconds(59).human, "0 hours, 0 minutes");
    }

    #[test]
    fn plural_above_one() {
        assert_eq!(Uptime::from_seconds(2 * 3600 + 5 * 60).human, "2 hours, 5 minutes");
        assert_eq!(Uptime::from_seconds(3600 + 120).human, "1 hour, 2 minutes");
        assert_eq!(Uptime::from_seconds(2 * 3600 + 60).human, "2 hours, 1 minute");
    }

    #[test]
    fn hours_do_not_roll_over_into_days() {
        assert_eq!(Uptime::from_seconds(49 * 3600).human, "49 hours, 0 minutes");
    }

    #[test]
    fn truncates_partial_seconds() {
        assert_eq!(Uptime::from(Duration::from_millis(1999)).seconds, 1);
    }

    #[test]
    fn never_decreases() {
        let start = StartTime::now();
        let first = start.uptime();
        let second = start.uptime();
        assert!(second.seconds >= first.seconds);
    }
}
