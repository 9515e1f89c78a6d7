// ABOUTME: Relative time humanization used by the elapsed template helper
// ABOUTME: Defines the TimeHumanizer capability and the default "N minutes ago" implementation

use chrono::{DateTime, Utc};

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Anything closer to "now" than this renders as "just now"
const JUST_NOW_MS: f64 = 45_000.0;

/// Converts an epoch timestamp in milliseconds into a human-readable
/// relative description such as "3 minutes ago".
pub trait TimeHumanizer: Send + Sync {
    fn humanize(&self, millis: f64) -> String;
}

impl<F> TimeHumanizer for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn humanize(&self, millis: f64) -> String {
        self(millis)
    }
}

/// Default humanizer, measuring against the wall clock unless pinned with [`RelativeTimeHumanizer::at`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeTimeHumanizer {
    now: Option<DateTime<Utc>>,
}

impl RelativeTimeHumanizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure every timestamp against a fixed instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }

    fn now_millis(&self) -> f64 {
        self.now.unwrap_or_else(Utc::now).timestamp_millis() as f64
    }
}

impl TimeHumanizer for RelativeTimeHumanizer {
    fn humanize(&self, millis: f64) -> String {
        if !millis.is_finite() {
            return String::new();
        }

        let delta = self.now_millis() - millis;
        let distance = delta.abs();
        if distance < JUST_NOW_MS {
            return "just now".to_string();
        }

        let (count, unit) = if distance < HOUR_MS {
            (distance / MINUTE_MS, "minute")
        } else if distance < DAY_MS {
            (distance / HOUR_MS, "hour")
        } else if distance < MONTH_MS {
            (distance / DAY_MS, "day")
        } else if distance < YEAR_MS {
            (distance / MONTH_MS, "month")
        } else {
            (distance / YEAR_MS, "year")
        };

        // 45..60 seconds floors to zero minutes
        let count = (count.floor() as u64).max(1);
        let phrase = if count == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", count, unit)
        };

        if delta >= 0.0 {
            format!("{} ago", phrase)
        } else {
            format!("in {}", phrase)
        }
    }
}
