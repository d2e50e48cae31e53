//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};

/// Service for managing log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "window_days" => Ok(config.window_days.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: window_days, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "window_days" => {
                config.set_window_days(value)?;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: window_days",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        let service = ConfigService::new(repo);
        (temp, service)
    }

    #[test]
    fn test_get_window_days() {
        let (_temp, service) = setup();
        assert_eq!(service.get("window_days").unwrap(), "7");
    }

    #[test]
    fn test_set_window_days() {
        let (_temp, service) = setup();
        service.set("window_days", "14").unwrap();
        assert_eq!(service.get("window_days").unwrap(), "14");
    }

    #[test]
    fn test_set_window_days_invalid() {
        let (_temp, service) = setup();
        assert!(service.set("window_days", "0").is_err());
        assert!(service.set("window_days", "soon").is_err());
        // Unchanged after failed sets
        assert_eq!(service.get("window_days").unwrap(), "7");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = setup();
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = setup();
        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
