// Test fixtures - reusable test data
// Provides consistent bell schedules and visits across test files
#![allow(dead_code)]

use chrono::NaiveDate;
use visit_scheduler::models::period::Period;
use visit_scheduler::models::portion::Portion;
use visit_scheduler::models::visit::VisitSchedule;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, March 4, 2025
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    /// Wednesday, March 5, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }
}

/// Sample bell schedules for testing
pub mod bells {
    use super::*;

    /// A five-period middle-school day.
    pub fn middle_school() -> Vec<Period> {
        vec![
            Period::new(1, "08:00", "08:50").unwrap(),
            Period::new(2, "09:00", "09:45").unwrap(),
            Period::new(3, "09:50", "10:35").unwrap(),
            Period::new(4, "10:40", "11:25").unwrap(),
            Period::new(5, "12:05", "12:52").unwrap(),
        ]
    }
}

/// Visit on the fixture Tuesday.
pub fn visit(teacher_id: &str, period_number: u32, portion: Portion) -> VisitSchedule {
    VisitSchedule::new(teacher_id, period_number, portion, dates::tuesday())
}
