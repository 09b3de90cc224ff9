//! Teacher timetable model.
//!
//! A teacher schedule lists, for each weekday, which class the teacher
//! teaches in which period. It is the input to the grid event transform in
//! [`crate::services::schedule_transform`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One taught class in a numbered period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPeriod {
    pub period_num: u32,
    pub class_name: String,
}

/// All classes a teacher has on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    #[serde(default)]
    pub periods: Vec<ClassPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSchedule {
    pub id: String,
    pub teacher_id: String,
    #[serde(default)]
    pub schedule_by_day: Vec<DaySchedule>,
}

impl TeacherSchedule {
    pub fn new(id: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            teacher_id: teacher_id.into(),
            schedule_by_day: Vec::new(),
        }
    }

    /// Add a class for `day`, creating the day entry if needed.
    pub fn with_class(mut self, day: Weekday, period_num: u32, class_name: impl Into<String>) -> Self {
        let class = ClassPeriod {
            period_num,
            class_name: class_name.into(),
        };
        match self.schedule_by_day.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.periods.push(class),
            None => self.schedule_by_day.push(DaySchedule {
                day,
                periods: vec![class],
            }),
        }
        self
    }

    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.schedule_by_day.iter().find(|entry| entry.day == day)
    }
}
