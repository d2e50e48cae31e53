//! Initialize log use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood log at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .moodlog directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized mood log at {}", path.display());
    println!("Window: {} days", config.window_days);

    Ok(())
}
