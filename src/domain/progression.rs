//! Experience, level, and streak derivation
//!
//! Each persisted entry earns 20 points; level is floor(total / 200). Both are
//! recomputed from the raw entry list on every read and never stored, so they
//! cannot drift out of sync with the data.

use crate::domain::entry::Entry;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Points granted per persisted entry
pub const XP_PER_ENTRY: i64 = 20;

/// Points required per level
pub const XP_PER_LEVEL: i64 = 200;

/// Total experience from all entries.
///
/// Every list element counts, including elements with duplicate or invalid
/// dates — deduplication is the storage layer's contract, not this one's.
pub fn total_experience(entries: &[Entry]) -> i64 {
    entries.len() as i64 * XP_PER_ENTRY
}

/// Level from total experience: floor(xp / 200), clamped to 0 for negative input
pub fn level_from_experience(xp: i64) -> i64 {
    if xp < 0 {
        return 0;
    }
    xp / XP_PER_LEVEL
}

/// Length of the run of consecutive calendar days ending at the most recent
/// logged date.
///
/// The run is anchored at the latest distinct valid date, not at "today": if
/// the last entry is several days old the streak still reports the run ending
/// there. Invalid date strings are excluded; an empty date set yields 0.
pub fn current_streak(entries: &[Entry]) -> u32 {
    let dates: BTreeSet<NaiveDate> = entries.iter().filter_map(Entry::date_value).collect();

    let Some(&latest) = dates.iter().next_back() else {
        return 0;
    };

    let mut streak = 0;
    let mut cursor = latest;
    while dates.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break, // Ran off the calendar
        }
    }
    streak
}

/// Gamified progression state derived from the full entry history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionState {
    pub total_xp: i64,
    pub level: i64,
    pub streak: u32,
}

impl ProgressionState {
    /// Derive the full progression state from the entry list
    pub fn compute(entries: &[Entry]) -> Self {
        let total_xp = total_experience(entries);
        ProgressionState {
            total_xp,
            level: level_from_experience(total_xp),
            streak: current_streak(entries),
        }
    }
}
