//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood and self-tracking log", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record today's snapshot (or another day's, via --date)
    Log {
        /// Logic ↔ Emotion, -5 to +5 (out-of-range values are clamped)
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        logic_emotion: i64,

        /// Inward ↔ Outward energy, -5 to +5
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        energy_direction: i64,

        /// Flow ↔ Control, -5 to +5
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        control_flow: i64,

        /// Emotional stability, 1 to 5
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        stability: i64,

        /// Free-form note for the day
        #[arg(long, default_value = "")]
        note: String,

        /// Date reference: today, yesterday, or YYYY-MM-DD
        #[arg(long, default_value = "today")]
        date: String,
    },

    /// Show the dashboard: XP, level, streak, and the weekly summary
    Stats,

    /// List stored entries, newest first
    List {
        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Only entries on or before this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Delete all stored entries
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}
