// Visit Scheduler
// Prints a scheduling report for a plan file

use anyhow::{Context, Result};
use std::path::PathBuf;

use visit_scheduler::models::calendar_event::CalendarEvent;
use visit_scheduler::models::portion::Portion;
use visit_scheduler::services::plan_file::PlanFile;
use visit_scheduler::services::planner::{DayPlan, ScheduleOutcome};
use visit_scheduler::services::resolver::{display_label, resolve_time_range_with};
use visit_scheduler::services::schedule_transform::transform_schedules_to_events;
use visit_scheduler::services::segmentation::{segment, validate_event_span};
use visit_scheduler::services::settings::SettingsService;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let plan_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: visit-scheduler <plan.toml>")?;

    log::info!("Starting Visit Scheduler with plan {}", plan_path.display());

    let settings = SettingsService::at_default_location().load_or_default();
    let plan = PlanFile::load(&plan_path)?;
    let day_type = plan.day_type_or(&settings.default_day_type).to_string();
    let bell_schedule = plan.bell_schedule();
    let periods = bell_schedule.periods_for_day_type(&day_type);

    println!("Visits for {} ({})", plan.date, day_type);
    let mut day_plan = DayPlan::new(plan.date);
    for visit in &plan.visits {
        let range =
            resolve_time_range_with(visit.period_number, visit.portion, &periods, settings.midpoint_rounding)
                .with_context(|| format!("Cannot place visit for {}", visit.teacher_id))?;

        match day_plan.schedule(visit.clone())? {
            ScheduleOutcome::Scheduled => {
                println!("  {} - {} ({})", visit.teacher_id, display_label(visit), range);
            }
            ScheduleOutcome::Rejected(warnings) => {
                println!("  {} - {} refused", visit.teacher_id, display_label(visit));
                for warning in warnings {
                    println!("    {}", warning);
                    for suggestion in &warning.suggestions {
                        println!("      try: {}", suggestion);
                    }
                }
            }
        }
    }

    println!("Open portions");
    for period in &periods {
        let open: Vec<&str> = day_plan
            .available_portions(period.period_number)
            .into_iter()
            .map(|portion: Portion| portion.as_str())
            .collect();
        println!("  Period {}: {}", period.period_number, open.join(", "));
    }

    let mut events: Vec<CalendarEvent> = plan.events.clone();
    let column_offset = events.iter().map(|event| event.column_index + 1).max().unwrap_or(0);
    events.extend(
        transform_schedules_to_events(&plan.teacher_schedules, &bell_schedule, plan.date, &day_type, &settings)
            .into_iter()
            .map(|event| {
                let column = event.column_index + column_offset;
                event.with_column(column)
            }),
    );

    println!("Grid segments");
    let total_periods = periods.iter().map(|period| period.period_number).max().unwrap_or(0);
    for event in &events {
        if !validate_event_span(event, total_periods)? {
            log::warn!("Event {} runs past period {}", event.id, total_periods);
        }
        let segments = segment(event)?;
        println!("  {}", serde_json::to_string(&segments)?);
    }

    Ok(())
}
