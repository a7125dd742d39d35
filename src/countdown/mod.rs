//! Countdown to a target instant.
//!
//! [`compute`] is a pure function of the target and the current instant;
//! [`CountdownTimer`] calls it on every tick and writes the result to the page.

mod timer;

pub use timer::{Clock, CountdownTimer, DEFAULT_INTERVAL, SystemClock, TimerSummary};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::warn;

use crate::content::{SiteInfo, present};
use crate::dom::{Mutation, Target};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Days added to "now" when no target is configured.
pub const DEFAULT_TARGET_DAYS: i64 = 30;

/// Whether the target is still ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Counting,
    Expired,
}

/// Two-digit fields shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    pub fn zero() -> Self {
        Self {
            days: "00".into(),
            hours: "00".into(),
            minutes: "00".into(),
            seconds: "00".into(),
        }
    }

    /// Decomposes a non-negative millisecond distance with floor division.
    pub fn from_millis(distance: i64) -> Self {
        Self {
            days: pad(distance / MS_PER_DAY),
            hours: pad((distance % MS_PER_DAY) / MS_PER_HOUR),
            minutes: pad((distance % MS_PER_HOUR) / MS_PER_MINUTE),
            seconds: pad((distance % MS_PER_MINUTE) / MS_PER_SECOND),
        }
    }

    #[cfg(test)]
    pub(crate) fn as_tuple(&self) -> (&str, &str, &str, &str) {
        (&self.days, &self.hours, &self.minutes, &self.seconds)
    }

    /// Text mutations for the four digit targets.
    pub fn mutations(&self) -> Vec<Mutation> {
        vec![
            Mutation::text(Target::CountdownDays, self.days.as_str()),
            Mutation::text(Target::CountdownHours, self.hours.as_str()),
            Mutation::text(Target::CountdownMinutes, self.minutes.as_str()),
            Mutation::text(Target::CountdownSeconds, self.seconds.as_str()),
        ]
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// Computes the display for `target` as seen at `now`.
pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>) -> (Phase, CountdownDisplay) {
    let distance = (target - now).num_milliseconds();
    if distance < 0 {
        (Phase::Expired, CountdownDisplay::zero())
    } else {
        (Phase::Counting, CountdownDisplay::from_millis(distance))
    }
}

/// Parses a configured target.
///
/// Accepts RFC 3339, a naive date-time (read as local time) and a bare
/// date (read as UTC midnight).
pub fn parse_target(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Resolves the countdown target from the site metadata, defaulting to
/// `now + default_days`.
pub fn resolve_target(
    site: Option<&SiteInfo>,
    now: DateTime<Utc>,
    default_days: i64,
) -> DateTime<Utc> {
    let fallback = default_target(now, default_days);
    let Some(raw) = site.and_then(|s| present(&s.countdown_target)) else {
        return fallback;
    };
    match parse_target(raw) {
        Some(target) => target,
        None => {
            warn!(value = %raw, "Invalid countdown target, using default");
            fallback
        }
    }
}

/// `now + days`, or `now + DEFAULT_TARGET_DAYS` when that overflows.
fn default_target(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|offset| now.checked_add_signed(offset))
        .unwrap_or_else(|| {
            warn!(days, "Default countdown offset out of range, using {} days", DEFAULT_TARGET_DAYS);
            now + Duration::days(DEFAULT_TARGET_DAYS)
        })
}
