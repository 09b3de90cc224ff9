// Service module exports
// Pure scheduling computations plus file-backed settings and plans

pub mod availability;
pub mod conflict;
pub mod plan_file;
pub mod planner;
pub mod resolver;
pub mod schedule_transform;
pub mod segmentation;
pub mod settings;
