//! Entry model and validated construction

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Regex for the canonical entry date form: zero-padded YYYY-MM-DD
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Parse a canonical YYYY-MM-DD date string.
///
/// Returns None for strings that do not match the canonical pattern or do not
/// name a real calendar date. Dates rejected here are excluded from every
/// date-based computation (window filtering, streak) but the entry itself
/// still counts toward experience points.
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    if !date_regex().is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The four tracked axes of a daily snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Logic ↔ Emotion, -5 to +5
    LogicEmotion,
    /// Inward ↔ Outward energy, -5 to +5
    EnergyDirection,
    /// Flow ↔ Control, -5 to +5
    ControlFlow,
    /// Emotional stability, 1 to 5
    Stability,
}

impl Dimension {
    /// All dimensions in display order
    pub const ALL: [Dimension; 4] = [
        Dimension::LogicEmotion,
        Dimension::EnergyDirection,
        Dimension::ControlFlow,
        Dimension::Stability,
    ];

    /// Inclusive (min, max) value range for this axis
    pub fn range(&self) -> (i64, i64) {
        match self {
            Dimension::Stability => (1, 5),
            _ => (-5, 5),
        }
    }

    /// Label used by the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::LogicEmotion => "Logic ↔ Emotion",
            Dimension::EnergyDirection => "Inward ↔ Outward Energy",
            Dimension::ControlFlow => "Flow ↔ Control",
            Dimension::Stability => "Emotional Stability",
        }
    }

    /// Serialized field name for this axis
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::LogicEmotion => "logicEmotion",
            Dimension::EnergyDirection => "energyDirection",
            Dimension::ControlFlow => "controlFlow",
            Dimension::Stability => "stability",
        }
    }

    /// Clamp a raw value into this axis's inclusive range
    pub fn clamp(&self, value: i64) -> i64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// One user submission for a calendar date.
///
/// The date string is the entry's natural key and is kept in its persisted
/// textual form; [`Entry::date_value`] gives the strict parse. Dimension
/// values are always within their declared ranges after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub date: String,
    pub logic_emotion: i64,
    pub energy_direction: i64,
    pub control_flow: i64,
    pub stability: i64,
    pub note: String,
}

impl Entry {
    /// Build an entry, clamping each dimension value into its declared range.
    /// Out-of-range input is never rejected.
    pub fn new(
        date: impl Into<String>,
        logic_emotion: i64,
        energy_direction: i64,
        control_flow: i64,
        stability: i64,
        note: impl Into<String>,
    ) -> Self {
        Entry {
            date: date.into(),
            logic_emotion: Dimension::LogicEmotion.clamp(logic_emotion),
            energy_direction: Dimension::EnergyDirection.clamp(energy_direction),
            control_flow: Dimension::ControlFlow.clamp(control_flow),
            stability: Dimension::Stability.clamp(stability),
            note: note.into(),
        }
    }

    /// Strictly parsed calendar date, None if the stored string is not canonical
    pub fn date_value(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.date)
    }

    /// Value of the given dimension
    pub fn value(&self, dimension: Dimension) -> i64 {
        match dimension {
            Dimension::LogicEmotion => self.logic_emotion,
            Dimension::EnergyDirection => self.energy_direction,
            Dimension::ControlFlow => self.control_flow,
            Dimension::Stability => self.stability,
        }
    }

    /// Build an entry from an untyped JSON record, absorbing malformed fields.
    ///
    /// Non-object records yield None and are dropped by the caller. A missing
    /// or non-numeric dimension value clamps to the range minimum; numeric
    /// values clamp to the nearest boundary. The date string is kept verbatim
    /// even when invalid, so the record still earns experience points.
    pub fn from_record(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let date = record
            .get("date")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let note = record
            .get("note")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let field = |dimension: Dimension| {
            let (min, _) = dimension.range();
            record
                .get(dimension.key())
                .and_then(Value::as_f64)
                .map(|n| dimension.clamp(n.trunc() as i64))
                .unwrap_or(min)
        };

        Some(Entry {
            date,
            logic_emotion: field(Dimension::LogicEmotion),
            energy_direction: field(Dimension::EnergyDirection),
            control_flow: field(Dimension::ControlFlow),
            stability: field(Dimension::Stability),
            note,
        })
    }
}
