//! Dashboard use case

use crate::domain::{ProgressionState, WeeklySummary};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, LogRepository};
use chrono::NaiveDate;

/// Everything the stats view renders.
///
/// `total_entries` lets the presentation distinguish "never logged anything"
/// from "nothing within the window" — both have an empty summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: WeeklySummary,
    pub progression: ProgressionState,
    pub total_entries: usize,
    pub window_days: u32,
}

/// Service computing the dashboard from stored entries
pub struct DashboardService {
    repository: FileSystemRepository,
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(repository: FileSystemRepository) -> Self {
        DashboardService { repository }
    }

    /// Compute the dashboard for the window ending at `today`
    pub fn execute(&self, today: NaiveDate) -> Result<Dashboard> {
        let config = self.repository.load_config()?;
        let entries = self.repository.load_entries();

        Ok(Dashboard {
            summary: WeeklySummary::compute(&entries, today, config.window_days),
            progression: ProgressionState::compute(&entries),
            total_entries: entries.len(),
            window_days: config.window_days,
        })
    }
}
