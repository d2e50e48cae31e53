//! Weekly aggregation over the trailing entry window

use crate::domain::entry::{parse_entry_date, Dimension, Entry};
use chrono::NaiveDate;

/// Default dashboard window, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// True iff the entry date falls within the trailing window ending at `today`.
///
/// The window is `[0, window_days)` whole days back: an entry dated `today`
/// is included, an entry dated exactly `window_days` days ago is not.
/// Computed with calendar-date arithmetic only; invalid date strings are
/// always outside the window.
pub fn is_within_trailing_window(entry_date: &str, today: NaiveDate, window_days: u32) -> bool {
    let Some(date) = parse_entry_date(entry_date) else {
        return false;
    };
    let days_back = (today - date).num_days();
    days_back >= 0 && days_back < i64::from(window_days)
}

/// All entries within the trailing window. Output order is unspecified.
pub fn filter_window(entries: &[Entry], today: NaiveDate, window_days: u32) -> Vec<&Entry> {
    entries
        .iter()
        .filter(|e| is_within_trailing_window(&e.date, today, window_days))
        .collect()
}

/// Arithmetic mean of a dimension over the given entries.
/// Returns 0 for an empty list; never divides by zero.
pub fn average(entries: &[&Entry], dimension: Dimension) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: i64 = entries.iter().map(|e| e.value(dimension)).sum();
    sum as f64 / entries.len() as f64
}

/// Linear rescale of `value` from `[min, max]` to `[0, 1]`, clamped after
/// rescaling so values slightly outside the declared range stay in bounds.
/// Non-finite input and degenerate ranges (`max <= min`) yield 0.
pub fn normalize(value: f64, min: i64, max: i64) -> f64 {
    if !value.is_finite() || max <= min {
        return 0.0;
    }
    let ratio = (value - min as f64) / (max - min) as f64;
    ratio.clamp(0.0, 1.0)
}

/// Round half away from zero to one decimal place.
/// Display-only; averaging always runs at full precision.
pub fn round_to_one_decimal(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// Average and normalized display ratio for one dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionStat {
    pub average: f64,
    /// In [0, 1]
    pub ratio: f64,
}

/// Rolling summary of the trailing window.
///
/// `count` is exposed distinctly from the per-dimension stats: zero entries in
/// the window means "no data this week" and callers branch on it to render an
/// empty state instead of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub count: usize,
    pub logic_emotion: DimensionStat,
    pub energy_direction: DimensionStat,
    pub control_flow: DimensionStat,
    pub stability: DimensionStat,
}

impl WeeklySummary {
    /// Compute the summary for the window ending at `today`
    pub fn compute(entries: &[Entry], today: NaiveDate, window_days: u32) -> Self {
        let window = filter_window(entries, today, window_days);

        let stat = |dimension: Dimension| {
            let avg = average(&window, dimension);
            let (min, max) = dimension.range();
            DimensionStat {
                average: avg,
                ratio: normalize(avg, min, max),
            }
        };

        WeeklySummary {
            count: window.len(),
            logic_emotion: stat(Dimension::LogicEmotion),
            energy_direction: stat(Dimension::EnergyDirection),
            control_flow: stat(Dimension::ControlFlow),
            stability: stat(Dimension::Stability),
        }
    }

    /// Stat for the given dimension
    pub fn stat(&self, dimension: Dimension) -> DimensionStat {
        match dimension {
            Dimension::LogicEmotion => self.logic_emotion,
            Dimension::EnergyDirection => self.energy_direction,
            Dimension::ControlFlow => self.control_flow,
            Dimension::Stability => self.stability,
        }
    }

    /// True when the window holds no entries
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_entry_date(s).unwrap()
    }

    fn entry_on(date: &str) -> Entry {
        Entry::new(date, 0, 0, 0, 3, "")
    }

    #[test]
    fn test_window_boundaries() {
        let today = date("2024-03-10");
        // 6 days back is inside the [0, 7) window
        assert!(is_within_trailing_window("2024-03-04", today, 7));
        // 7 days back is outside
        assert!(!is_within_trailing_window("2024-03-03", today, 7));
        // Today itself is inside
        assert!(is_within_trailing_window("2024-03-10", today, 7));
        // Future dates are outside
        assert!(!is_within_trailing_window("2024-03-11", today, 7));
    }

    #[test]
    fn test_window_rejects_invalid_dates() {
        let today = date("2024-03-10");
        assert!(!is_within_trailing_window("", today, 7));
        assert!(!is_within_trailing_window("2024-3-10", today, 7));
        assert!(!is_within_trailing_window("garbage", today, 7));
    }

    #[test]
    fn test_window_across_month_boundary() {
        let today = date("2024-03-02");
        assert!(is_within_trailing_window("2024-02-25", today, 7));
        assert!(!is_within_trailing_window("2024-02-24", today, 7));
    }

    #[test]
    fn test_filter_window() {
        let entries = vec![
            entry_on("2024-03-10"),
            entry_on("2024-03-04"),
            entry_on("2024-03-03"),
            entry_on("bogus"),
        ];
        let window = filter_window(&entries, date("2024-03-10"), 7);
        let dates: Vec<&str> = window.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-10", "2024-03-04"]);
    }

    #[test]
    fn test_average_empty_is_zero() {
        let window: Vec<&Entry> = vec![];
        assert_eq!(average(&window, Dimension::LogicEmotion), 0.0);
        assert_eq!(average(&window, Dimension::Stability), 0.0);
    }

    #[test]
    fn test_average_full_precision() {
        let entries = vec![
            Entry::new("2024-03-10", 1, 0, 0, 3, ""),
            Entry::new("2024-03-09", 2, 0, 0, 3, ""),
            Entry::new("2024-03-08", 2, 0, 0, 3, ""),
        ];
        let window: Vec<&Entry> = entries.iter().collect();
        let avg = average(&window, Dimension::LogicEmotion);
        assert!((avg - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_domain_ranges() {
        assert_eq!(normalize(0.0, -5, 5), 0.5);
        assert_eq!(normalize(5.0, -5, 5), 1.0);
        assert_eq!(normalize(-5.0, -5, 5), 0.0);
        assert_eq!(normalize(1.0, 1, 5), 0.0);
        assert_eq!(normalize(5.0, 1, 5), 1.0);
        assert_eq!(normalize(3.0, 1, 5), 0.5);
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(normalize(9.0, -5, 5), 1.0);
        assert_eq!(normalize(-9.0, -5, 5), 0.0);
        assert_eq!(normalize(0.0, 1, 5), 0.0);
    }

    #[test]
    fn test_normalize_degenerate_input() {
        assert_eq!(normalize(f64::NAN, -5, 5), 0.0);
        assert_eq!(normalize(f64::INFINITY, -5, 5), 0.0);
        assert_eq!(normalize(3.0, 5, 5), 0.0);
        assert_eq!(normalize(3.0, 5, -5), 0.0);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to_one_decimal(1.24), 1.2);
        assert_eq!(round_to_one_decimal(1.25), 1.3);
        assert_eq!(round_to_one_decimal(-1.25), -1.3);
        assert_eq!(round_to_one_decimal(0.0), 0.0);
        assert_eq!(round_to_one_decimal(2.0), 2.0);
    }

    #[test]
    fn test_summary_counts_window_entries() {
        let entries = vec![
            Entry::new("2024-03-10", 3, -2, 1, 4, ""),
            Entry::new("2024-03-09", -1, 2, 1, 2, ""),
            Entry::new("2024-03-01", 5, 5, 5, 5, ""), // Outside the window
        ];
        let summary = WeeklySummary::compute(&entries, date("2024-03-10"), 7);
        assert_eq!(summary.count, 2);
        assert!(!summary.is_empty());
        assert_eq!(summary.logic_emotion.average, 1.0);
        assert_eq!(summary.energy_direction.average, 0.0);
        assert_eq!(summary.control_flow.average, 1.0);
        assert_eq!(summary.stability.average, 3.0);
        assert_eq!(summary.logic_emotion.ratio, 0.6);
        assert_eq!(summary.stability.ratio, 0.5);
    }

    #[test]
    fn test_summary_empty_window() {
        let entries = vec![entry_on("2024-01-01")];
        let summary = WeeklySummary::compute(&entries, date("2024-03-10"), 7);
        assert!(summary.is_empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.logic_emotion.average, 0.0);
        // A zero average on a 1..5 axis still normalizes to a clamped ratio
        assert_eq!(summary.stability.ratio, 0.0);
    }

    #[test]
    fn test_summary_idempotent() {
        let entries = vec![
            Entry::new("2024-03-10", 3, -2, 1, 4, "a"),
            Entry::new("2024-03-08", -4, 1, 0, 2, "b"),
        ];
        let today = date("2024-03-10");
        let first = WeeklySummary::compute(&entries, today, 7);
        let second = WeeklySummary::compute(&entries, today, 7);
        assert_eq!(first, second);
    }
}
