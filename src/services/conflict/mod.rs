//! Visit conflict detection.
//!
//! Rules, in order of precedence:
//! 1. Visits on different dates never conflict.
//! 2. The same teacher in overlapping portions of one period is a
//!    [`ConflictType::TeacherConflict`].
//! 3. Different teachers in overlapping portions of one period is a
//!    [`ConflictType::PeriodOverlap`].
//! 4. Groups additionally enforce [`MAX_TEACHERS_PER_PERIOD`] and reject the
//!    same teacher appearing twice in a period.
//!
//! Detection never fails; every outcome is a [`ConflictResult`].

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::conflict::{ConflictResult, ConflictType, ConflictWarning};
use crate::models::portion::Portion;
use crate::models::visit::VisitSchedule;

/// How many distinct teachers one period can host.
pub const MAX_TEACHERS_PER_PERIOD: usize = 2;

/// Symmetric overlap test over the three portions.
pub fn portions_overlap(a: Portion, b: Portion) -> bool {
    a.overlaps(b)
}

/// Check whether two visits can both be kept.
pub fn detect_conflict(a: &VisitSchedule, b: &VisitSchedule) -> ConflictResult {
    if a.date != b.date {
        return ConflictResult::Clear;
    }

    if a.period_number != b.period_number || !portions_overlap(a.portion, b.portion) {
        return ConflictResult::Clear;
    }

    let warning = if a.teacher_id == b.teacher_id {
        teacher_overlap_warning(&a.teacher_id, a.period_number)
    } else {
        period_overlap_warning(a.period_number)
    };

    log::debug!("Conflict between visits on {}: {}", a.date, warning);
    warning.into()
}

/// Check whether a batch of visits can be booked together.
pub fn can_schedule_group(visits: &[VisitSchedule]) -> ConflictResult {
    if visits.len() <= 1 {
        return ConflictResult::Clear;
    }

    for ((_, period_number), teachers) in teachers_by_slot(visits) {
        if teachers.len() > MAX_TEACHERS_PER_PERIOD {
            let warning = capacity_warning(period_number, teachers.len());
            log::debug!("Group rejected: {}", warning);
            return warning.into();
        }
    }

    for (index, first) in visits.iter().enumerate() {
        for second in &visits[index + 1..] {
            if first.teacher_id == second.teacher_id
                && first.date == second.date
                && first.period_number == second.period_number
            {
                let warning = ConflictWarning::new(
                    ConflictType::TeacherConflict,
                    format!(
                        "Cannot schedule the same teacher twice in Period {}",
                        first.period_number
                    ),
                )
                .with_suggestions(["Select a different teacher", "Choose a different time slot"]);
                log::debug!("Group rejected: {}", warning);
                return warning.into();
            }

            let result = detect_conflict(first, second);
            if result.has_conflict() {
                return result;
            }
        }
    }

    ConflictResult::Clear
}

/// Every conflict `candidate` would introduce against already-booked visits.
///
/// Run this again at commit time against the full visit list for the date;
/// an earlier check may be stale by then.
pub fn check_against_existing(candidate: &VisitSchedule, existing: &[VisitSchedule]) -> Vec<ConflictWarning> {
    let mut warnings: Vec<ConflictWarning> = existing
        .iter()
        .filter_map(|visit| detect_conflict(candidate, visit).into_warning())
        .collect();

    let mut teachers: BTreeSet<&str> = existing
        .iter()
        .filter(|visit| visit.date == candidate.date && visit.period_number == candidate.period_number)
        .map(|visit| visit.teacher_id.as_str())
        .collect();
    teachers.insert(candidate.teacher_id.as_str());

    if teachers.len() > MAX_TEACHERS_PER_PERIOD {
        warnings.push(capacity_warning(candidate.period_number, teachers.len()));
    }

    warnings
}

fn teachers_by_slot(visits: &[VisitSchedule]) -> BTreeMap<(NaiveDate, u32), BTreeSet<&str>> {
    let mut slots: BTreeMap<(NaiveDate, u32), BTreeSet<&str>> = BTreeMap::new();
    for visit in visits {
        slots
            .entry((visit.date, visit.period_number))
            .or_default()
            .insert(visit.teacher_id.as_str());
    }
    slots
}

fn teacher_overlap_warning(teacher_id: &str, period_number: u32) -> ConflictWarning {
    ConflictWarning::new(
        ConflictType::TeacherConflict,
        format!(
            "Teacher {} cannot be scheduled for overlapping time slots in Period {}",
            teacher_id, period_number
        ),
    )
    .with_suggestions(["Select non-overlapping portions", "Choose a different period"])
}

fn period_overlap_warning(period_number: u32) -> ConflictWarning {
    ConflictWarning::new(
        ConflictType::PeriodOverlap,
        format!("Time portions overlap in Period {}", period_number),
    )
    .with_suggestions([
        "Select non-overlapping portions (e.g., first half + second half)",
        "Choose a different period",
    ])
}

fn capacity_warning(period_number: u32, teacher_count: usize) -> ConflictWarning {
    ConflictWarning::new(
        ConflictType::CapacityExceeded,
        format!(
            "Maximum {} teachers can be scheduled in the same period (Period {} would have {})",
            MAX_TEACHERS_PER_PERIOD, period_number, teacher_count
        ),
    )
    .with_suggestions(["Select a different period", "Remove one teacher selection"])
}
