//! Open portions for a period.
//!
//! Whatever this returns must book cleanly through
//! [`crate::services::conflict::detect_conflict`] against the visits it was
//! computed from.

use std::collections::BTreeSet;

use crate::models::portion::Portion;
use crate::models::visit::VisitSchedule;

/// Portions of `period_number` still free given `existing_visits`.
///
/// `existing_visits` should already be narrowed to one date.
pub fn available_portions(period_number: u32, existing_visits: &[VisitSchedule]) -> BTreeSet<Portion> {
    let booked: Vec<&VisitSchedule> = existing_visits
        .iter()
        .filter(|visit| visit.period_number == period_number)
        .collect();

    match booked.as_slice() {
        [] => Portion::ALL.into_iter().collect(),
        [only] => match only.portion {
            Portion::FullPeriod => BTreeSet::new(),
            Portion::FirstHalf => BTreeSet::from([Portion::SecondHalf]),
            Portion::SecondHalf => BTreeSet::from([Portion::FirstHalf]),
        },
        // At capacity.
        _ => BTreeSet::new(),
    }
}

/// Whether `portion` is still open in `period_number`.
pub fn is_available(period_number: u32, portion: Portion, existing_visits: &[VisitSchedule]) -> bool {
    available_portions(period_number, existing_visits).contains(&portion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::conflict::detect_conflict;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn visit(teacher: &str, period: u32, portion: Portion) -> VisitSchedule {
        VisitSchedule::new(teacher, period, portion, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())
    }

    #[test]
    fn test_empty_period_has_everything() {
        let open = available_portions(1, &[]);
        assert_eq!(open.into_iter().collect::<Vec<_>>(), Portion::ALL.to_vec());
    }

    #[test_case(Portion::FullPeriod, &[] ; "full period blocks everything")]
    #[test_case(Portion::FirstHalf, &[Portion::SecondHalf] ; "first half leaves second")]
    #[test_case(Portion::SecondHalf, &[Portion::FirstHalf] ; "second half leaves first")]
    fn test_single_booking(booked: Portion, expected: &[Portion]) {
        let open = available_portions(3, &[visit("a", 3, booked)]);
        assert_eq!(open, expected.iter().copied().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_two_bookings_fill_period() {
        let existing = [visit("a", 2, Portion::FirstHalf), visit("b", 2, Portion::SecondHalf)];
        assert!(available_portions(2, &existing).is_empty());
    }

    #[test]
    fn test_other_periods_ignored() {
        let existing = [visit("a", 1, Portion::FullPeriod), visit("b", 4, Portion::FirstHalf)];
        assert_eq!(available_portions(2, &existing).len(), 3);
        assert!(is_available(4, Portion::SecondHalf, &existing));
        assert!(!is_available(4, Portion::FullPeriod, &existing));
    }

    #[test]
    fn test_available_portions_never_conflict() {
        for booked in Portion::ALL {
            let existing = [visit("a", 6, booked)];
            for portion in available_portions(6, &existing) {
                for teacher in ["a", "b"] {
                    let candidate = visit(teacher, 6, portion);
                    assert!(!detect_conflict(&candidate, &existing[0]).has_conflict());
                }
            }
        }
    }
}
