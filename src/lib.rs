//! moodlog - Terminal mood and self-tracking log
//!
//! A command-line self-tracking application that records one snapshot per day
//! of four bounded mood dimensions plus a note, and summarizes the trailing
//! week as a dashboard with experience points, level, and streak.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
