//! Configuration management

use crate::domain::stats::DEFAULT_WINDOW_DAYS;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard window length in days, at least 1
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            window_days: DEFAULT_WINDOW_DAYS,
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        // Ensure .moodlog directory exists
        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Set the dashboard window length from raw user input
    pub fn set_window_days(&mut self, value: &str) -> Result<()> {
        let days: u32 = value
            .parse()
            .map_err(|_| MoodlogError::Config(format!("Invalid window_days: '{}'", value)))?;
        if days == 0 {
            return Err(MoodlogError::Config(
                "Invalid window_days: '0' (the window cannot be empty)".to_string(),
            ));
        }
        self.window_days = days;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
