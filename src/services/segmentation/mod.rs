//! Event segmentation for the period grid.
//!
//! A grid row is one bell-schedule period, so an event lasting more than one
//! period (or starting at a period's midpoint) is drawn as several pieces.
//! [`segment`] produces those pieces in period order. It is pure: calling it
//! again on the same event yields the same segments, so callers may cache.

use crate::error::{Result, SchedulingError};
use crate::models::calendar_event::{CalendarEvent, EventSegment, SegmentPosition, StartPosition};

/// Split `event` into one segment per grid period it touches.
///
/// The first segment reuses the event id; later ones are
/// `"{id}-segment-{period}"`. Exactly one segment has `is_last` set and the
/// segment durations sum to `total_duration`.
///
/// # Examples
/// ```
/// use visit_scheduler::models::calendar_event::{CalendarEvent, SegmentPosition};
/// use visit_scheduler::services::segmentation::segment;
///
/// let event = CalendarEvent::new("math", 1, 2.5);
/// let segments = segment(&event).unwrap();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[2].position, SegmentPosition::Start);
/// assert!(segments[2].is_last);
/// ```
pub fn segment(event: &CalendarEvent) -> Result<Vec<EventSegment<'_>>> {
    event.validate()?;

    let mut segments = Vec::new();
    let mut remaining = event.total_duration;
    let mut current_period = event.period;

    let (first_duration, first_position) = match event.start_position {
        StartPosition::Middle => (remaining.min(0.5), SegmentPosition::Middle),
        StartPosition::Start => {
            let duration = remaining.min(1.0);
            let position = if duration == 1.0 {
                SegmentPosition::Full
            } else {
                SegmentPosition::Start
            };
            (duration, position)
        }
    };

    segments.push(EventSegment {
        id: event.id.clone(),
        parent_event_id: event.id.clone(),
        period: current_period,
        segment_duration: first_duration,
        position: first_position,
        is_first: true,
        is_last: false,
        original: event,
    });
    remaining -= first_duration;

    while remaining > 0.0 {
        current_period = current_period
            .checked_add(1)
            .ok_or_else(|| SchedulingError::InvalidPeriod {
                period_number: event.period,
                reason: "event runs past the last period".to_string(),
            })?;
        let duration = remaining.min(1.0);
        let position = if duration == 1.0 {
            SegmentPosition::Full
        } else {
            SegmentPosition::Start
        };
        segments.push(continuation(event, current_period, duration, position));
        remaining -= duration;
    }

    if let Some(last) = segments.last_mut() {
        last.is_last = true;
    }

    Ok(segments)
}

fn continuation(
    event: &CalendarEvent,
    period: u32,
    duration: f64,
    position: SegmentPosition,
) -> EventSegment<'_> {
    EventSegment {
        id: format!("{}-segment-{}", event.id, period),
        parent_event_id: event.id.clone(),
        period,
        segment_duration: duration,
        position,
        is_first: false,
        is_last: false,
        original: event,
    }
}

/// Segments that belong in one grid cell (`period_number`, `column_index`).
pub fn segments_for_period(
    events: &[CalendarEvent],
    period_number: u32,
    column_index: usize,
) -> Result<Vec<EventSegment<'_>>> {
    let mut cell = Vec::new();
    for event in events.iter().filter(|event| event.column_index == column_index) {
        cell.extend(
            segment(event)?
                .into_iter()
                .filter(|segment| segment.period == period_number),
        );
    }
    Ok(cell)
}

/// The grid period holding the event's final segment.
pub fn event_end_period(event: &CalendarEvent) -> Result<u32> {
    Ok(segment(event)?
        .last()
        .map(|segment| segment.period)
        .unwrap_or(event.period))
}

/// Whether the event ends within a grid of `total_periods` rows.
pub fn validate_event_span(event: &CalendarEvent, total_periods: u32) -> Result<bool> {
    Ok(event_end_period(event)? <= total_periods)
}
