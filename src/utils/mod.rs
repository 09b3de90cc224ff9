// Utility modules
// Pure helpers shared by models and services

pub mod time;
