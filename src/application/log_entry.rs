//! Log entry use case

use crate::domain::{DateReference, Entry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Raw, not-yet-validated submission from the CLI.
/// Dimension values may be out of range; they are clamped, never rejected.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub date_ref: String,
    pub logic_emotion: i64,
    pub energy_direction: i64,
    pub control_flow: i64,
    pub stability: i64,
    pub note: String,
}

/// Service for recording daily snapshots
pub struct LogEntryService {
    repository: FileSystemRepository,
}

impl LogEntryService {
    /// Create a new log entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        LogEntryService { repository }
    }

    /// Record one entry, replacing any existing entry for the same date.
    ///
    /// `today` is the caller's local civil date; the date reference resolves
    /// against it and may not land after it (a snapshot describes a day that
    /// has already started).
    pub fn execute(&self, draft: &EntryDraft, today: NaiveDate) -> Result<Entry> {
        let date_ref = DateReference::parse(&draft.date_ref)?;
        let date = date_ref.resolve(today);

        if date > today {
            return Err(MoodlogError::InvalidDate(format!(
                "{} is in the future",
                date.format("%Y-%m-%d")
            )));
        }

        let entry = Entry::new(
            date.format("%Y-%m-%d").to_string(),
            draft.logic_emotion,
            draft.energy_direction,
            draft.control_flow,
            draft.stability,
            draft.note.clone(),
        );

        self.repository.save_entry_replacing_date(&entry)?;

        Ok(entry)
    }
}
