//! File system repository

use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for log operations
pub trait LogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover log root by walking up from current directory.
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check MOODLOG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .moodlog
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }
}

impl LogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }
}

// Entry collection operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Path of the entries document
    pub fn entries_path(&self) -> PathBuf {
        self.root.join(".moodlog").join("entries.json")
    }

    /// Load all stored entries.
    ///
    /// Never fails: a missing or unreadable file, non-JSON content, or a
    /// non-array document all yield an empty list, and malformed array
    /// elements are absorbed per the entry validation rules. Corrupted
    /// storage degrades to "no data", it does not take the dashboard down.
    pub fn load_entries(&self) -> Vec<Entry> {
        let Ok(raw) = fs::read_to_string(self.entries_path()) else {
            return Vec::new();
        };
        let Ok(document) = serde_json::from_str::<Value>(&raw) else {
            return Vec::new();
        };
        let Value::Array(records) = document else {
            return Vec::new();
        };
        records.iter().filter_map(Entry::from_record).collect()
    }

    /// Save one entry, replacing any existing entry with the same date.
    /// This is the only write path, so the one-entry-per-date invariant
    /// holds for everything this repository has written.
    pub fn save_entry_replacing_date(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.load_entries();
        entries.retain(|existing| existing.date != entry.date);
        entries.push(entry.clone());
        self.write_entries(&entries)
    }

    /// Remove all stored entries. The log directory and config are kept.
    pub fn clear_entries(&self) -> Result<()> {
        let path = self.entries_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Write the full entry list using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        let path = self.entries_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;

        let tmp_name = format!("entries.json.moodlog-tmp-{}", std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
