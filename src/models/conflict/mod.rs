//! Conflict result values.
//!
//! A conflict is an expected outcome of a scheduling attempt, not an error.
//! Results are plain data that can be shown to users or logged verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why two or more visits cannot share a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Different teachers booked into overlapping portions of one period.
    PeriodOverlap,
    /// The same teacher booked twice into overlapping time.
    TeacherConflict,
    /// More teachers in one period than the period can host.
    CapacityExceeded,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::PeriodOverlap => "period_overlap",
            ConflictType::TeacherConflict => "teacher_conflict",
            ConflictType::CapacityExceeded => "capacity_exceeded",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected conflict with user-facing text.
///
/// `message` and `suggestions` are advisory; only `conflict_type` drives behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ConflictWarning {
    pub fn new(conflict_type: ConflictType, message: impl Into<String>) -> Self {
        Self {
            conflict_type,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.conflict_type, self.message)
    }
}

/// Outcome of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConflictResult {
    Clear,
    Conflict(ConflictWarning),
}

impl ConflictResult {
    pub fn has_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict(_))
    }

    pub fn conflict_type(&self) -> Option<ConflictType> {
        self.warning().map(|warning| warning.conflict_type)
    }

    pub fn warning(&self) -> Option<&ConflictWarning> {
        match self {
            ConflictResult::Clear => None,
            ConflictResult::Conflict(warning) => Some(warning),
        }
    }

    pub fn into_warning(self) -> Option<ConflictWarning> {
        match self {
            ConflictResult::Clear => None,
            ConflictResult::Conflict(warning) => Some(warning),
        }
    }
}

impl From<ConflictWarning> for ConflictResult {
    fn from(warning: ConflictWarning) -> Self {
        ConflictResult::Conflict(warning)
    }
}
