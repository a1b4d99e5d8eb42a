//! Elapsed-time formatting and color tiers.

use crate::models::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Format a duration in milliseconds as `MM:SS`, or `HH:MM:SS` from one hour up.
pub fn format_time(ms: u64) -> String {
    let seconds = (ms / MS_PER_SECOND) % 60;
    let minutes = (ms / MS_PER_MINUTE) % 60;
    let hours = ms / MS_PER_HOUR;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Milliseconds from `since` to `now`, clamped at zero for clock skew.
pub fn elapsed_ms(since: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - since).num_milliseconds()).unwrap_or(0)
}

/// Display urgency of an elapsed time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeTier {
    Nominal,
    Warning,
    Critical,
}

/// Tier thresholds in whole minutes: on court 30/60, in the queue 10/20.
pub fn time_tier(location: Location, ms: u64) -> TimeTier {
    let minutes = ms / MS_PER_MINUTE;
    let (warn_at, critical_at) = match location {
        Location::Court => (30, 60),
        Location::Queue => (10, 20),
    };
    if minutes < warn_at {
        TimeTier::Nominal
    } else if minutes < critical_at {
        TimeTier::Warning
    } else {
        TimeTier::Critical
    }
}
