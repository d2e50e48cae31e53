//! Domain layer - Entry model and pure aggregation/progression logic

pub mod entry;
pub mod progression;
pub mod stats;
pub mod time_ref;

pub use entry::{Dimension, Entry};
pub use progression::ProgressionState;
pub use stats::WeeklySummary;
pub use time_ref::DateReference;
