//! Date reference parsing and resolution

use crate::domain::entry::parse_entry_date;
use crate::error::{MoodlogError, Result};
use chrono::{Duration, NaiveDate};

/// A date reference that can be resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Specific calendar date
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string: `today`, `yesterday`, or canonical
    /// `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => parse_entry_date(&normalized)
                .map(DateReference::Specific)
                .ok_or_else(|| MoodlogError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => base_date,
            DateReference::Yesterday => base_date - Duration::days(1),
            DateReference::Specific(date) => *date,
        }
    }
}
