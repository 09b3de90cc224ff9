// Visit module
// Classroom-observation booking expressed as period + portion

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};
use crate::models::portion::Portion;

/// A scheduled coaching visit for one teacher on one date.
///
/// Visits are never edited in place; a change is a cancel followed by a new
/// booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitSchedule {
    pub teacher_id: String,
    pub period_number: u32,
    pub portion: Portion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub date: NaiveDate,
}

impl VisitSchedule {
    /// Create a visit without a purpose.
    ///
    /// # Examples
    /// ```
    /// use visit_scheduler::models::portion::Portion;
    /// use visit_scheduler::models::visit::VisitSchedule;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    /// let visit = VisitSchedule::new("teacher-a", 2, Portion::FirstHalf, date);
    /// assert!(visit.validate().is_ok());
    /// ```
    pub fn new(
        teacher_id: impl Into<String>,
        period_number: u32,
        portion: Portion,
        date: NaiveDate,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            period_number,
            portion,
            purpose: None,
            date,
        }
    }

    /// Attach a free-text purpose (e.g. "Observation").
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.teacher_id.trim().is_empty() {
            return Err(SchedulingError::InvalidVisit("Teacher ID is required".to_string()));
        }

        if self.period_number < 1 {
            return Err(SchedulingError::InvalidVisit(
                "Valid period number is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `other` occupies the same booking slot (teacher, date, period, portion).
    pub fn same_slot(&self, other: &VisitSchedule) -> bool {
        self.teacher_id == other.teacher_id
            && self.date == other.date
            && self.period_number == other.period_number
            && self.portion == other.portion
    }
}
