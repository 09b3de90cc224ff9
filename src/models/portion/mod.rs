//! Portion model: which fraction of a period a visit occupies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchedulingError;

/// The part of a period a visit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Portion {
    FirstHalf,
    SecondHalf,
    FullPeriod,
}

impl Portion {
    /// Every portion, in display order.
    pub const ALL: [Portion; 3] = [Portion::FirstHalf, Portion::SecondHalf, Portion::FullPeriod];

    /// Wire name, e.g. `"first_half"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Portion::FirstHalf => "first_half",
            Portion::SecondHalf => "second_half",
            Portion::FullPeriod => "full_period",
        }
    }

    /// Label used in human-readable visit descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Portion::FirstHalf => "First half",
            Portion::SecondHalf => "Second half",
            Portion::FullPeriod => "Full period",
        }
    }

    /// Whether two portions of the same period share any time.
    ///
    /// A full period overlaps everything, each half overlaps itself, and the
    /// two halves are disjoint.
    pub fn overlaps(self, other: Portion) -> bool {
        match (self, other) {
            (Portion::FullPeriod, _) | (_, Portion::FullPeriod) => true,
            (Portion::FirstHalf, Portion::SecondHalf) | (Portion::SecondHalf, Portion::FirstHalf) => {
                false
            }
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Portion {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first_half" => Ok(Portion::FirstHalf),
            "second_half" => Ok(Portion::SecondHalf),
            "full_period" => Ok(Portion::FullPeriod),
            other => Err(SchedulingError::InvalidPortion(other.to_string())),
        }
    }
}
