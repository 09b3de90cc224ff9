//! Bell-schedule model.
//!
//! A bell schedule is a list of numbered periods, each tagged with the day
//! type it applies to. Periods tagged `uniform` apply to every day type.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SchedulingError};
use crate::utils::time::{self, clock_format};

/// Day type shared by every day of the week.
pub const UNIFORM_DAY_TYPE: &str = "uniform";

/// Shortest period that still splits into two non-empty halves.
pub const MIN_PERIOD_MINUTES: i64 = 2;

fn uniform_day_type() -> String {
    UNIFORM_DAY_TYPE.to_string()
}

/// One row of a bell schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub period_number: u32,
    #[serde(with = "clock_format")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_format")]
    pub end_time: NaiveTime,
    #[serde(default = "uniform_day_type")]
    pub day_type: String,
}

impl Period {
    /// Create a validated `uniform` period from `HH:MM` strings.
    ///
    /// # Examples
    /// ```
    /// use visit_scheduler::models::period::Period;
    ///
    /// let period = Period::new(2, "09:00", "09:45").unwrap();
    /// assert_eq!(period.length_minutes(), 45);
    /// ```
    pub fn new(period_number: u32, start_time: &str, end_time: &str) -> Result<Self> {
        let period = Self {
            period_number,
            start_time: time::parse_clock(start_time)?,
            end_time: time::parse_clock(end_time)?,
            day_type: uniform_day_type(),
        };
        period.validate()?;
        Ok(period)
    }

    /// Tag this period with a specific day type (e.g. `"a_day"`).
    pub fn with_day_type(mut self, day_type: impl Into<String>) -> Self {
        self.day_type = day_type.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.period_number == 0 {
            return Err(SchedulingError::InvalidPeriod {
                period_number: self.period_number,
                reason: "period numbers start at 1".to_string(),
            });
        }

        if self.start_time >= self.end_time {
            return Err(SchedulingError::InvalidPeriod {
                period_number: self.period_number,
                reason: format!(
                    "start {} must be before end {}",
                    time::format_clock(self.start_time),
                    time::format_clock(self.end_time)
                ),
            });
        }

        if self.length_minutes() < MIN_PERIOD_MINUTES {
            return Err(SchedulingError::InvalidPeriod {
                period_number: self.period_number,
                reason: format!("periods must last at least {} minutes", MIN_PERIOD_MINUTES),
            });
        }

        Ok(())
    }

    pub fn length_minutes(&self) -> i64 {
        time::minutes_from_midnight(self.end_time) - time::minutes_from_midnight(self.start_time)
    }

    /// Whether this period applies on the given day type.
    pub fn applies_to(&self, day_type: &str) -> bool {
        self.day_type == day_type || self.day_type == UNIFORM_DAY_TYPE
    }
}

/// A school's bell schedule across all day types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BellSchedule {
    #[serde(default)]
    pub periods: Vec<Period>,
}

impl BellSchedule {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Validate every period and reject duplicate numbers within a day type.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for period in &self.periods {
            period.validate()?;
            if !seen.insert((period.day_type.as_str(), period.period_number)) {
                return Err(SchedulingError::DuplicatePeriod {
                    period_number: period.period_number,
                    day_type: period.day_type.clone(),
                });
            }
        }
        Ok(())
    }

    /// Periods that apply on `day_type`, sorted by period number.
    pub fn periods_for_day_type(&self, day_type: &str) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .periods
            .iter()
            .filter(|period| period.applies_to(day_type))
            .cloned()
            .collect();
        periods.sort_by_key(|period| period.period_number);
        periods
    }

    /// Find a period by number for a day type.
    pub fn find(&self, period_number: u32, day_type: &str) -> Option<&Period> {
        self.periods
            .iter()
            .find(|period| period.period_number == period_number && period.applies_to(day_type))
    }
}

/// Look up a period by number in an already day-filtered list.
pub fn find_period(periods: &[Period], period_number: u32) -> Result<&Period> {
    periods
        .iter()
        .find(|period| period.period_number == period_number)
        .ok_or(SchedulingError::PeriodNotFound(period_number))
}
