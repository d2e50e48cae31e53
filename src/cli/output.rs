//! Output formatting utilities

use crate::application::Dashboard;
use crate::domain::entry::Dimension;
use crate::domain::stats::round_to_one_decimal;
use crate::domain::Entry;

/// Width of the ratio bar in cells
const BAR_CELLS: usize = 10;

/// Render a [0, 1] ratio as a ten-cell text bar
fn ratio_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_CELLS as f64).round() as usize).min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// Format the stats dashboard for display.
///
/// XP, level, and streak render as integers; averages render with exactly one
/// decimal. An empty window renders an empty-state line instead of the
/// summary, worded differently for "never logged" vs "nothing recent".
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    let progression = &dashboard.progression;
    output.push_str(&format!("XP: {}\n", progression.total_xp));
    output.push_str(&format!("Level: {}\n", progression.level));
    let day_word = if progression.streak == 1 { "day" } else { "days" };
    output.push_str(&format!("Streak: {} {}\n", progression.streak, day_word));
    output.push('\n');

    if dashboard.summary.is_empty() {
        if dashboard.total_entries == 0 {
            output.push_str("No entries yet. Record your first snapshot with 'moodlog log'.\n");
        } else {
            output.push_str(&format!(
                "No entries in the last {} days.\n",
                dashboard.window_days
            ));
        }
        return output;
    }

    let entry_word = if dashboard.summary.count == 1 {
        "entry"
    } else {
        "entries"
    };
    output.push_str(&format!(
        "Last {} days ({} {}):\n",
        dashboard.window_days, dashboard.summary.count, entry_word
    ));

    for dimension in Dimension::ALL {
        let stat = dashboard.summary.stat(dimension);
        output.push_str(&format!(
            "  {:<26} {:>5.1}  [{}]\n",
            dimension.label(),
            round_to_one_decimal(stat.average),
            ratio_bar(stat.ratio)
        ));
    }

    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  logic {:+}  energy {:+}  control {:+}  stability {}",
            entry.date,
            entry.logic_emotion,
            entry.energy_direction,
            entry.control_flow,
            entry.stability
        ));
        if !entry.note.is_empty() {
            output.push_str(&format!("  {}", entry.note));
        }
        output.push('\n');
    }
    output
}
