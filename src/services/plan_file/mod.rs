//! TOML plan files.
//!
//! A plan file bundles everything the scheduling core needs for one school
//! day. Dates are quoted strings (`date = "2025-03-04"`).
//!
//! ```toml
//! date = "2025-03-04"
//! day_type = "uniform"
//!
//! [[periods]]
//! period_number = 1
//! start_time = "08:00"
//! end_time = "08:45"
//!
//! [[visits]]
//! teacher_id = "t-ramos"
//! period_number = 1
//! portion = "first_half"
//! date = "2025-03-04"
//! ```

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::calendar_event::CalendarEvent;
use crate::models::period::{BellSchedule, Period};
use crate::models::teacher_schedule::TeacherSchedule;
use crate::models::visit::VisitSchedule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    pub date: NaiveDate,
    #[serde(default)]
    pub day_type: Option<String>,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub visits: Vec<VisitSchedule>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub teacher_schedules: Vec<TeacherSchedule>,
}

impl PlanFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid plan file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let plan: PlanFile = toml::from_str(raw).context("Failed to parse plan TOML")?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn bell_schedule(&self) -> BellSchedule {
        BellSchedule::new(self.periods.clone())
    }

    /// Day type from the file, or `fallback` when it names none.
    pub fn day_type_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.day_type.as_deref().unwrap_or(fallback)
    }

    fn validate(&self) -> Result<()> {
        self.bell_schedule().validate()?;

        for visit in &self.visits {
            visit.validate()?;
            if visit.date != self.date {
                return Err(anyhow!(
                    "Visit for {} is dated {} but the plan is for {}",
                    visit.teacher_id,
                    visit.date,
                    self.date
                ));
            }
        }

        Ok(())
    }
}
