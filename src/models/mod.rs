// Module exports for models
// Plain data shared between the scheduling services

pub mod calendar_event;
pub mod conflict;
pub mod period;
pub mod portion;
pub mod settings;
pub mod teacher_schedule;
pub mod visit;
