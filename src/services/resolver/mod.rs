//! Period-portion resolution.
//!
//! Visits are stored as `(period_number, portion)`; wall-clock ranges are
//! derived from the bell schedule on demand and never stored, so they cannot
//! drift from the schedule.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::period::{find_period, Period};
use crate::models::portion::Portion;
use crate::models::visit::VisitSchedule;
use crate::utils::time::{self, clock_format, MidpointRounding};

/// A concrete wall-clock window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "clock_format")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_format")]
    pub end_time: NaiveTime,
}

impl TimeRange {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self { start_time, end_time }
    }

    pub fn start_label(&self) -> String {
        time::format_clock(self.start_time)
    }

    pub fn end_label(&self) -> String {
        time::format_clock(self.end_time)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_label(), self.end_label())
    }
}

/// Resolve a period and portion to its time range, splitting halves with floor rounding.
pub fn resolve_time_range(period_number: u32, portion: Portion, periods: &[Period]) -> Result<TimeRange> {
    resolve_time_range_with(period_number, portion, periods, MidpointRounding::default())
}

/// Resolve a period and portion using an explicit midpoint rounding rule.
pub fn resolve_time_range_with(
    period_number: u32,
    portion: Portion,
    periods: &[Period],
    rounding: MidpointRounding,
) -> Result<TimeRange> {
    let period = find_period(periods, period_number)?;
    Ok(portion_range(period, portion, rounding))
}

/// The time range a visit occupies.
pub fn time_range_for_visit(visit: &VisitSchedule, periods: &[Period]) -> Result<TimeRange> {
    resolve_time_range(visit.period_number, visit.portion, periods)
}

/// Split a known period.
pub fn portion_range(period: &Period, portion: Portion, rounding: MidpointRounding) -> TimeRange {
    match portion {
        Portion::FullPeriod => TimeRange::new(period.start_time, period.end_time),
        Portion::FirstHalf => {
            let mid = time::midpoint(period.start_time, period.end_time, rounding);
            TimeRange::new(period.start_time, mid)
        }
        Portion::SecondHalf => {
            let mid = time::midpoint(period.start_time, period.end_time, rounding);
            TimeRange::new(mid, period.end_time)
        }
    }
}

/// Recover which portion of `period` a range covers, if any.
pub fn portion_for_range(period: &Period, range: &TimeRange, rounding: MidpointRounding) -> Option<Portion> {
    let mid = time::midpoint(period.start_time, period.end_time, rounding);
    let starts_at_period = range.start_time == period.start_time;
    let ends_at_period = range.end_time == period.end_time;

    if starts_at_period && ends_at_period {
        Some(Portion::FullPeriod)
    } else if starts_at_period && range.end_time == mid {
        Some(Portion::FirstHalf)
    } else if range.start_time == mid && ends_at_period {
        Some(Portion::SecondHalf)
    } else {
        None
    }
}

/// Human-readable description, e.g. `"First half of Period 2"`.
pub fn display_label(visit: &VisitSchedule) -> String {
    format!("{} of Period {}", visit.portion.label(), visit.period_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulingError;
    use chrono::NaiveDate;

    fn periods() -> Vec<Period> {
        vec![
            Period::new(1, "08:00", "08:50").unwrap(),
            Period::new(2, "09:00", "09:45").unwrap(),
        ]
    }

    #[test]
    fn test_full_period_range() {
        let range = resolve_time_range(1, Portion::FullPeriod, &periods()).unwrap();
        assert_eq!(range.to_string(), "08:00-08:50");
    }

    #[test]
    fn test_first_half_floors_midpoint() {
        let range = resolve_time_range(2, Portion::FirstHalf, &periods()).unwrap();
        assert_eq!(range.start_label(), "09:00");
        assert_eq!(range.end_label(), "09:22");
    }

    #[test]
    fn test_second_half_floors_midpoint() {
        let range = resolve_time_range(2, Portion::SecondHalf, &periods()).unwrap();
        assert_eq!(range.to_string(), "09:22-09:45");
    }

    #[test]
    fn test_nearest_rounding_moves_split() {
        let range =
            resolve_time_range_with(2, Portion::FirstHalf, &periods(), MidpointRounding::Nearest).unwrap();
        assert_eq!(range.end_label(), "09:23");
    }

    #[test]
    fn test_missing_period_fails() {
        let result = resolve_time_range(5, Portion::FullPeriod, &periods());
        assert_eq!(result, Err(SchedulingError::PeriodNotFound(5)));
    }

    #[test]
    fn test_portion_for_range_round_trip() {
        let list = periods();
        for period in &list {
            for portion in Portion::ALL {
                let range = portion_range(period, portion, MidpointRounding::Floor);
                assert_eq!(
                    portion_for_range(period, &range, MidpointRounding::Floor),
                    Some(portion)
                );
            }
        }
    }

    #[test]
    fn test_portion_for_unrelated_range() {
        let period = &periods()[0];
        let range = TimeRange::new(time::parse_clock("08:10").unwrap(), time::parse_clock("08:20").unwrap());
        assert_eq!(portion_for_range(period, &range, MidpointRounding::Floor), None);
    }

    #[test]
    fn test_display_label() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let visit = VisitSchedule::new("t-1", 2, Portion::FirstHalf, date);
        assert_eq!(display_label(&visit), "First half of Period 2");

        let visit = VisitSchedule::new("t-1", 6, Portion::FullPeriod, date);
        assert_eq!(display_label(&visit), "Full period of Period 6");
    }

    #[test]
    fn test_time_range_for_visit() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let visit = VisitSchedule::new("t-1", 1, Portion::SecondHalf, date);
        let range = time_range_for_visit(&visit, &periods()).unwrap();
        assert_eq!(range.to_string(), "08:25-08:50");
    }

    #[test]
    fn test_time_range_serializes_as_clock_strings() {
        let range = resolve_time_range(2, Portion::FirstHalf, &periods()).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start_time":"09:00","end_time":"09:22"}"#);
    }
}
