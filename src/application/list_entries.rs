//! List entries use case

use crate::domain::Entry;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// List stored entries, newest first, with optional date range and limit.
///
/// Entries whose stored date is not canonical sort after all dated entries
/// and are unaffected by the range filters.
pub fn list_entries(
    repository: &FileSystemRepository,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Vec<Entry> {
    let mut entries = repository.load_entries();

    // Apply date range filters
    if let Some(from_date) = from {
        entries.retain(|e| e.date_value().is_none_or(|d| d >= from_date));
    }
    if let Some(to_date) = to {
        entries.retain(|e| e.date_value().is_none_or(|d| d <= to_date));
    }

    // Sort by date descending (newest first)
    entries.sort_by(|a, b| match (a.date_value(), b.date_value()) {
        (Some(da), Some(db)) => db.cmp(&da), // Reverse order for descending
        (Some(_), None) => std::cmp::Ordering::Less, // Dated before undated
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.date.cmp(&b.date),
    });

    // Apply limit
    if let Some(n) = limit {
        entries.truncate(n);
    }

    entries
}
