// Visit Scheduler Library
// Period-based visit scheduling: time ranges, conflicts, availability, grid segments

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Result, SchedulingError};
