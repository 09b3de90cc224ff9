//! Domain errors for the scheduling core.
//!
//! These indicate caller or data bugs (a stale bell schedule, a value outside
//! its domain). Scheduling conflicts are not errors; see
//! [`crate::models::conflict::ConflictResult`].

use thiserror::Error;

/// Errors raised by the scheduling core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingError {
    /// The referenced period number is not in the supplied bell schedule.
    #[error("Period {0} not found in bell schedule")]
    PeriodNotFound(u32),

    /// A portion string outside `first_half`, `second_half`, `full_period`.
    #[error("Invalid portion type: {0}")]
    InvalidPortion(String),

    /// An event duration that is zero, negative or not finite.
    #[error("Invalid event duration: {0} (must be a positive number of periods)")]
    InvalidDuration(f64),

    /// A clock string that is not `HH:MM`.
    #[error("Invalid clock time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid period {period_number}: {reason}")]
    InvalidPeriod { period_number: u32, reason: String },

    #[error("Period {period_number} appears more than once for day type '{day_type}'")]
    DuplicatePeriod { period_number: u32, day_type: String },

    #[error("Invalid visit: {0}")]
    InvalidVisit(String),
}

pub type Result<T> = std::result::Result<T, SchedulingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_not_found_names_period() {
        let err = SchedulingError::PeriodNotFound(7);
        assert_eq!(err.to_string(), "Period 7 not found in bell schedule");
    }

    #[test]
    fn test_invalid_portion_message() {
        let err = SchedulingError::InvalidPortion("third_half".to_string());
        assert!(err.to_string().contains("third_half"));
    }
}
