// Clock-time utility functions
// Minute-precision arithmetic on bell-schedule times

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// How a midpoint that falls between two whole minutes is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidpointRounding {
    /// Drop the half minute: 09:00–09:45 splits at 09:22.
    #[default]
    Floor,
    /// Round a half minute up: 09:00–09:45 splits at 09:23.
    Nearest,
}

/// Parse a wall-clock string such as `"09:05"` (seconds are accepted and ignored).
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| SchedulingError::InvalidTime(value.to_string()))?;

    Ok(truncate_to_minute(parsed))
}

/// Render a time as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time - Duration::seconds(i64::from(time.second())) - Duration::nanoseconds(i64::from(time.nanosecond()))
}

/// Compute the clock time halfway between `start` and `end`.
///
/// The mean is taken in whole minutes and rounded according to `rounding`,
/// so the result is always minute-aligned and the same inputs always give
/// the same output.
pub fn midpoint(start: NaiveTime, end: NaiveTime, rounding: MidpointRounding) -> NaiveTime {
    let start_minutes = minutes_from_midnight(start);
    let end_minutes = minutes_from_midnight(end);
    let sum = start_minutes + end_minutes;

    let mid_minutes = match rounding {
        MidpointRounding::Floor => sum.div_euclid(2),
        MidpointRounding::Nearest => (sum + 1).div_euclid(2),
    };

    truncate_to_minute(start) + Duration::minutes(mid_minutes - start_minutes)
}

/// Length of `start..end` counted in `increment_minutes` steps, rounded half up.
///
/// Bell-schedule durations are reported in five-minute increments, so a
/// 45 minute period is `9`. An increment of zero is treated as one minute.
pub fn duration_in_increments(start: NaiveTime, end: NaiveTime, increment_minutes: u32) -> i64 {
    let increment = f64::from(increment_minutes.max(1));
    let minutes = (minutes_from_midnight(end) - minutes_from_midnight(start)) as f64;
    (minutes / increment + 0.5).floor() as i64
}

/// Serde adapter storing a [`NaiveTime`] as `"HH:MM"`.
pub mod clock_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for an optional `"HH:MM"` time.
pub mod optional_clock_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_some(&super::format_clock(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| super::parse_clock(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}
