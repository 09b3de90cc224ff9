// Calendar event module
// Period-grid events and the per-period segments they render as

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};
use crate::utils::time::optional_clock_format;

/// Where in its starting period an event begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
    /// Aligned to the period's first minute.
    #[default]
    Start,
    /// Begins at the period's midpoint.
    Middle,
}

/// Which part of a grid cell a segment fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPosition {
    Full,
    Start,
    Middle,
}

/// Longest event, in periods, that the grid will segment.
pub const MAX_EVENT_PERIODS: f64 = 64.0;

fn default_color() -> String {
    "blue".to_string()
}

/// An event placed on a bell-schedule grid.
///
/// `total_duration` is measured in periods: `1.0` is one full period and
/// `0.5` half of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub period: u32,
    #[serde(default)]
    pub column_index: usize,
    #[serde(default)]
    pub start_position: StartPosition,
    pub total_duration: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, with = "optional_clock_format", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// Length of the underlying slot in five-minute increments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl CalendarEvent {
    /// Create an event starting at the beginning of `period`.
    pub fn new(id: impl Into<String>, period: u32, total_duration: f64) -> Self {
        Self {
            id: id.into(),
            period,
            column_index: 0,
            start_position: StartPosition::Start,
            total_duration,
            title: String::new(),
            color: default_color(),
            start_time: None,
            duration: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_column(mut self, column_index: usize) -> Self {
        self.column_index = column_index;
        self
    }

    pub fn starting_at(mut self, start_position: StartPosition) -> Self {
        self.start_position = start_position;
        self
    }

    /// Reject events that cannot be segmented.
    pub fn validate(&self) -> Result<()> {
        if !self.total_duration.is_finite()
            || self.total_duration <= 0.0
            || self.total_duration > MAX_EVENT_PERIODS
        {
            return Err(SchedulingError::InvalidDuration(self.total_duration));
        }

        if self.period == 0 {
            return Err(SchedulingError::InvalidPeriod {
                period_number: self.period,
                reason: "events must start in period 1 or later".to_string(),
            });
        }

        if self.period.checked_add(self.period_span() - 1).is_none() {
            return Err(SchedulingError::InvalidPeriod {
                period_number: self.period,
                reason: format!("an event of {} periods cannot start here", self.total_duration),
            });
        }

        Ok(())
    }

    /// Number of grid periods the event touches.
    ///
    /// Only meaningful for a duration that passed [`CalendarEvent::validate`].
    pub fn period_span(&self) -> u32 {
        let span = match self.start_position {
            StartPosition::Start => self.total_duration.ceil(),
            StartPosition::Middle => 1.0 + (self.total_duration - 0.5).max(0.0).ceil(),
        };
        span.clamp(1.0, MAX_EVENT_PERIODS + 1.0) as u32
    }
}

/// The slice of a [`CalendarEvent`] that falls in one grid period.
///
/// Display metadata is read through `original` rather than copied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSegment<'a> {
    pub id: String,
    pub parent_event_id: String,
    pub period: u32,
    pub segment_duration: f64,
    pub position: SegmentPosition,
    pub is_first: bool,
    pub is_last: bool,
    pub original: &'a CalendarEvent,
}

impl EventSegment<'_> {
    pub fn title(&self) -> &str {
        &self.original.title
    }

    pub fn color(&self) -> &str {
        &self.original.color
    }

    pub fn column_index(&self) -> usize {
        self.original.column_index
    }

    /// Whether the segment fills less than its whole grid cell.
    pub fn is_partial(&self) -> bool {
        self.segment_duration < 1.0
    }
}
