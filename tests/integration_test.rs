// Integration tests for the scheduling core
// Walks the booking flow a coach follows and the grid render pass

mod fixtures;

use fixtures::{bells, dates, visit};
use pretty_assertions::assert_eq;
use visit_scheduler::models::calendar_event::{CalendarEvent, SegmentPosition, StartPosition};
use visit_scheduler::models::conflict::ConflictType;
use visit_scheduler::models::period::BellSchedule;
use visit_scheduler::models::portion::Portion;
use visit_scheduler::models::settings::SchedulerSettings;
use visit_scheduler::models::teacher_schedule::TeacherSchedule;
use visit_scheduler::services::availability::available_portions;
use visit_scheduler::services::conflict::{can_schedule_group, detect_conflict};
use visit_scheduler::services::plan_file::PlanFile;
use visit_scheduler::services::planner::DayPlan;
use visit_scheduler::services::resolver::{display_label, resolve_time_range, time_range_for_visit};
use visit_scheduler::services::schedule_transform::transform_schedules_to_events;
use visit_scheduler::services::segmentation::{segment, segments_for_period};
use visit_scheduler::SchedulingError;

#[test]
fn test_first_half_resolves_with_floored_midpoint() {
    let range = resolve_time_range(2, Portion::FirstHalf, &bells::middle_school()).unwrap();
    assert_eq!(range.start_label(), "09:00");
    assert_eq!(range.end_label(), "09:22");
}

#[test]
fn test_unknown_period_is_reported() {
    let result = resolve_time_range(9, Portion::FullPeriod, &bells::middle_school());
    assert_eq!(result, Err(SchedulingError::PeriodNotFound(9)));
}

#[test]
fn test_full_period_blocks_other_teacher_half() {
    let a = visit("teacher-a", 2, Portion::FullPeriod);
    let b = visit("teacher-b", 2, Portion::FirstHalf);
    let result = detect_conflict(&a, &b);
    assert!(result.has_conflict());
    assert_eq!(result.conflict_type(), Some(ConflictType::PeriodOverlap));
}

#[test]
fn test_first_half_booking_leaves_second_half() {
    let existing = vec![visit("teacher-a", 3, Portion::FirstHalf)];
    let open: Vec<Portion> = available_portions(3, &existing).into_iter().collect();
    assert_eq!(open, vec![Portion::SecondHalf]);
}

#[test]
fn test_multi_period_event_segments() {
    let event = CalendarEvent::new("block", 1, 2.5);
    let segments = segment(&event).unwrap();
    let summary: Vec<(u32, f64, SegmentPosition, bool)> = segments
        .iter()
        .map(|s| (s.period, s.segment_duration, s.position, s.is_last))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, 1.0, SegmentPosition::Full, false),
            (2, 1.0, SegmentPosition::Full, false),
            (3, 0.5, SegmentPosition::Start, true),
        ]
    );
}

#[test]
fn test_coach_books_a_day() {
    let periods = bells::middle_school();
    let mut plan = DayPlan::new(dates::tuesday());

    assert!(plan.schedule(visit("ramos", 2, Portion::FirstHalf)).unwrap().is_scheduled());
    assert!(plan.schedule(visit("chen", 2, Portion::SecondHalf)).unwrap().is_scheduled());

    let refused = plan.schedule(visit("okafor", 2, Portion::FullPeriod)).unwrap();
    assert!(!refused.is_scheduled());
    assert!(refused
        .warnings()
        .iter()
        .any(|w| w.conflict_type == ConflictType::CapacityExceeded));
    assert!(plan.available_portions(2).is_empty());

    assert!(plan.schedule(visit("okafor", 3, Portion::FullPeriod)).unwrap().is_scheduled());

    let labels: Vec<String> = plan
        .visits()
        .iter()
        .map(|v| format!("{} {}", display_label(v), time_range_for_visit(v, &periods).unwrap()))
        .collect();
    assert_eq!(
        labels,
        vec![
            "First half of Period 2 09:00-09:22",
            "Second half of Period 2 09:22-09:45",
            "Full period of Period 3 09:50-10:35",
        ]
    );

    assert!(!can_schedule_group(plan.visits()).has_conflict());
}

#[test]
fn test_visits_on_different_days_can_share_slots() {
    let tuesday = visit("ramos", 4, Portion::FullPeriod);
    let mut wednesday = tuesday.clone();
    wednesday.date = dates::wednesday();
    assert!(!detect_conflict(&tuesday, &wednesday).has_conflict());
}

#[test]
fn test_grid_render_pass_from_teacher_schedules() {
    let bell = BellSchedule::new(bells::middle_school());
    let schedules = vec![
        TeacherSchedule::new("s-ramos", "ramos")
            .with_class(chrono::Weekday::Tue, 1, "Math 6")
            .with_class(chrono::Weekday::Tue, 2, "Prep"),
        TeacherSchedule::new("s-chen", "chen").with_class(chrono::Weekday::Tue, 2, "Science 7"),
    ];

    let mut events = transform_schedules_to_events(
        &schedules,
        &bell,
        dates::tuesday(),
        "uniform",
        &SchedulerSettings::default(),
    );
    events.push(
        CalendarEvent::new("debrief", 1, 1.0)
            .with_column(1)
            .starting_at(StartPosition::Middle)
            .with_title("Debrief"),
    );

    let ramos_p2 = segments_for_period(&events, 2, 0).unwrap();
    assert_eq!(ramos_p2.len(), 1);
    assert_eq!(ramos_p2[0].title(), "Prep");
    assert_eq!(ramos_p2[0].color(), "gray");

    let chen_p2: Vec<String> = segments_for_period(&events, 2, 1)
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(chen_p2, vec!["s-chen-2", "debrief-segment-2"]);
}

#[test]
fn test_demo_plan_file_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/plan.toml");
    let plan = PlanFile::load(&path).unwrap();
    assert_eq!(plan.date, dates::tuesday());
    assert_eq!(plan.visits.len(), 3);

    let result = DayPlan::from_visits(plan.date, plan.visits.clone());
    assert!(result.is_err(), "demo plan deliberately contains an overlap");
}
