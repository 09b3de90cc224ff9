//! Caller-owned visit plan for one school day.
//!
//! `DayPlan` holds the committed visits for a date and only admits a new one
//! after re-checking it against everything already in the plan. Persisting
//! the plan is the caller's job; the datastore should enforce the same
//! overlap rule so a stale plan cannot double-book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Result, SchedulingError};
use crate::models::conflict::ConflictWarning;
use crate::models::portion::Portion;
use crate::models::visit::VisitSchedule;
use crate::services::{availability, conflict};

/// Result of trying to add a visit to a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "warnings", rename_all = "snake_case")]
pub enum ScheduleOutcome {
    Scheduled,
    Rejected(Vec<ConflictWarning>),
}

impl ScheduleOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduleOutcome::Scheduled)
    }

    pub fn warnings(&self) -> &[ConflictWarning] {
        match self {
            ScheduleOutcome::Scheduled => &[],
            ScheduleOutcome::Rejected(warnings) => warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    date: NaiveDate,
    visits: Vec<VisitSchedule>,
}

impl DayPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            visits: Vec::new(),
        }
    }

    /// Build a plan by scheduling `visits` in order; the first refusal aborts.
    pub fn from_visits(date: NaiveDate, visits: impl IntoIterator<Item = VisitSchedule>) -> Result<Self> {
        let mut plan = Self::new(date);
        for visit in visits {
            let label = format!("{} in period {}", visit.teacher_id, visit.period_number);
            if let ScheduleOutcome::Rejected(warnings) = plan.schedule(visit)? {
                let reasons: Vec<String> = warnings.iter().map(ToString::to_string).collect();
                return Err(SchedulingError::InvalidVisit(format!(
                    "Visit conflict for {}: {}",
                    label,
                    reasons.join(", ")
                )));
            }
        }
        Ok(plan)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn visits(&self) -> &[VisitSchedule] {
        &self.visits
    }

    pub fn visits_for_teacher<'a>(&'a self, teacher_id: &'a str) -> impl Iterator<Item = &'a VisitSchedule> + 'a {
        self.visits.iter().filter(move |visit| visit.teacher_id == teacher_id)
    }

    /// Conflict-check `visit` against the plan and add it if clear.
    pub fn schedule(&mut self, visit: VisitSchedule) -> Result<ScheduleOutcome> {
        visit.validate()?;
        self.ensure_same_date(&visit)?;

        let warnings = conflict::check_against_existing(&visit, &self.visits);
        if !warnings.is_empty() {
            log::info!(
                "Refused visit for {} in period {} on {}: {} conflict(s)",
                visit.teacher_id,
                visit.period_number,
                self.date,
                warnings.len()
            );
            return Ok(ScheduleOutcome::Rejected(warnings));
        }

        log::debug!(
            "Scheduled {} {} in period {} on {}",
            visit.teacher_id,
            visit.portion,
            visit.period_number,
            self.date
        );
        self.visits.push(visit);
        Ok(ScheduleOutcome::Scheduled)
    }

    /// Remove the visit booked in the same slot as `visit`. Returns whether one was removed.
    pub fn cancel(&mut self, visit: &VisitSchedule) -> bool {
        match self.visits.iter().position(|existing| existing.same_slot(visit)) {
            Some(index) => {
                self.visits.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`; on refusal `old` is put back where it was.
    pub fn reschedule(&mut self, old: &VisitSchedule, new: VisitSchedule) -> Result<ScheduleOutcome> {
        let index = self
            .visits
            .iter()
            .position(|existing| existing.same_slot(old))
            .ok_or_else(|| {
                SchedulingError::InvalidVisit(format!(
                    "No visit for {} in period {} to reschedule",
                    old.teacher_id, old.period_number
                ))
            })?;

        let removed = self.visits.remove(index);
        let outcome = self.schedule(new);

        if !matches!(outcome, Ok(ScheduleOutcome::Scheduled)) {
            self.visits.insert(index, removed);
        }

        outcome
    }

    /// Portions still open in `period_number` on this plan's date.
    pub fn available_portions(&self, period_number: u32) -> BTreeSet<Portion> {
        availability::available_portions(period_number, &self.visits)
    }

    fn ensure_same_date(&self, visit: &VisitSchedule) -> Result<()> {
        if visit.date != self.date {
            return Err(SchedulingError::InvalidVisit(format!(
                "Visit date {} does not match plan date {}",
                visit.date, self.date
            )));
        }
        Ok(())
    }
}
