// Schedule transform service
// Maps teacher timetables onto bell-schedule grid events

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_event::{CalendarEvent, StartPosition};
use crate::models::period::BellSchedule;
use crate::models::settings::SchedulerSettings;
use crate::models::teacher_schedule::TeacherSchedule;
use crate::utils::time;

const DEFAULT_SUBJECT_COLOR: &str = "blue";

/// Checked in order; the first keyword contained in the class name wins.
const SUBJECT_COLORS: &[(&str, &str)] = &[
    ("math", "blue"),
    ("english", "blue"),
    ("ela", "blue"),
    ("science", "blue"),
    ("history", "blue"),
    ("social", "blue"),
    ("prep", "gray"),
    ("lunch", "pink"),
    ("meeting", "pink"),
    ("sped", "purple"),
];

/// Display colour for a class, matched case-insensitively by subject keyword.
pub fn subject_color(class_name: &str) -> &'static str {
    let lower = class_name.to_lowercase();
    SUBJECT_COLORS
        .iter()
        .find(|(subject, _)| lower.contains(subject))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_SUBJECT_COLOR)
}

/// One teacher's classes on `date` as single-period grid events.
///
/// Classes whose period has no bell-schedule entry for `day_type` are skipped.
pub fn transform_schedule_to_events(
    schedule: &TeacherSchedule,
    bell_schedule: &BellSchedule,
    date: NaiveDate,
    day_type: &str,
    settings: &SchedulerSettings,
) -> Vec<CalendarEvent> {
    let Some(day) = schedule.day(date.weekday()) else {
        return Vec::new();
    };

    let mut events: Vec<CalendarEvent> = day
        .periods
        .iter()
        .filter_map(|class| {
            let Some(bell_period) = bell_schedule.find(class.period_num, day_type) else {
                log::debug!(
                    "No bell period {} for day type '{}' (schedule {})",
                    class.period_num,
                    day_type,
                    schedule.id
                );
                return None;
            };

            Some(CalendarEvent {
                id: format!("{}-{}", schedule.id, class.period_num),
                period: class.period_num,
                column_index: 0,
                start_position: StartPosition::Start,
                total_duration: 1.0,
                title: class.class_name.clone(),
                color: subject_color(&class.class_name).to_string(),
                start_time: Some(bell_period.start_time),
                duration: Some(time::duration_in_increments(
                    bell_period.start_time,
                    bell_period.end_time,
                    settings.duration_increment_minutes,
                )),
            })
        })
        .collect();

    events.sort_by_key(|event| event.period);
    events
}

/// Transform many schedules; each schedule's position becomes its grid column.
pub fn transform_schedules_to_events(
    schedules: &[TeacherSchedule],
    bell_schedule: &BellSchedule,
    date: NaiveDate,
    day_type: &str,
    settings: &SchedulerSettings,
) -> Vec<CalendarEvent> {
    schedules
        .iter()
        .enumerate()
        .flat_map(|(column_index, schedule)| {
            let events = transform_schedule_to_events(schedule, bell_schedule, date, day_type, settings);
            log::debug!("Teacher {} generated {} events", schedule.teacher_id, events.len());
            events
                .into_iter()
                .map(move |event| event.with_column(column_index))
        })
        .collect()
}
