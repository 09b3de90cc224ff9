use crate::models::settings::SchedulerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the platform config directory, falling back to the current directory.
    pub fn at_default_location() -> Self {
        match ProjectDirs::from("com", "VisitScheduler", "VisitScheduler") {
            Some(dirs) => Self::new(dirs.config_dir().join(SETTINGS_FILE)),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for settings");
                Self::new(SETTINGS_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file
    pub fn load(&self) -> Result<SchedulerSettings> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;

        let settings: SchedulerSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Load settings, using defaults when the file is missing or invalid
    pub fn load_or_default(&self) -> SchedulerSettings {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return SchedulerSettings::default();
        }

        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                SchedulerSettings::default()
            }
        }
    }

    /// Write settings, creating parent directories as needed
    pub fn save(&self, settings: &SchedulerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}
