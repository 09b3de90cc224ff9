// Settings service module
// Loads scheduler settings from a TOML file

mod service;

pub use service::SettingsService;
