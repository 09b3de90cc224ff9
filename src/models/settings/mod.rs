// Settings module
// Tunables for time resolution and grid transforms

use serde::{Deserialize, Serialize};

use crate::models::period::UNIFORM_DAY_TYPE;
use crate::utils::time::MidpointRounding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub midpoint_rounding: MidpointRounding,
    pub duration_increment_minutes: u32,
    pub default_day_type: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            midpoint_rounding: MidpointRounding::Floor,
            duration_increment_minutes: 5,
            default_day_type: UNIFORM_DAY_TYPE.to_string(),
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_increment_minutes == 0 {
            return Err("Duration increment must be at least 1 minute".to_string());
        }

        if self.duration_increment_minutes > 60 {
            return Err("Duration increment cannot exceed 60 minutes".to_string());
        }

        if self.default_day_type.trim().is_empty() {
            return Err("Default day type cannot be empty".to_string());
        }

        Ok(())
    }
}
