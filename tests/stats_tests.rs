//! Integration tests for the stats dashboard

use chrono::{Duration, Local};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn init_log(temp: &TempDir) {
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
}

fn log_on(temp: &TempDir, date: &str, logic_emotion: &str) {
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "--logic-emotion", logic_emotion])
        .args(["--energy-direction", "0", "--control-flow", "0"])
        .args(["--stability", "3", "--date", date])
        .assert()
        .success();
}

fn days_ago(n: i64) -> String {
    (Local::now().date_naive() - Duration::days(n))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_stats_never_logged() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 0"))
        .stdout(predicate::str::contains("Level: 0"))
        .stdout(predicate::str::contains("Streak: 0 days"))
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_stats_single_entry() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);
    log_on(&temp, "today", "3");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 20"))
        .stdout(predicate::str::contains("Level: 0"))
        .stdout(predicate::str::contains("Streak: 1 day\n"))
        .stdout(predicate::str::contains("Last 7 days (1 entry):"))
        .stdout(predicate::str::contains("Logic ↔ Emotion"))
        .stdout(predicate::str::contains("3.0"));
}

#[test]
fn test_stats_streak_over_consecutive_days() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);
    log_on(&temp, &days_ago(2), "1");
    log_on(&temp, &days_ago(1), "2");
    log_on(&temp, "today", "3");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 60"))
        .stdout(predicate::str::contains("Streak: 3 days"))
        .stdout(predicate::str::contains("Last 7 days (3 entries):"))
        .stdout(predicate::str::contains("2.0")); // (1 + 2 + 3) / 3
}

#[test]
fn test_stats_old_entry_counts_xp_but_not_week() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);
    log_on(&temp, &days_ago(10), "4");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 20"))
        // Streak is anchored at the latest logged date, not at today
        .stdout(predicate::str::contains("Streak: 1 day\n"))
        .stdout(predicate::str::contains("No entries in the last 7 days"));
}

#[test]
fn test_stats_window_boundary() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);
    // 6 days back is inside the [0, 7) window, 7 days back is not
    log_on(&temp, &days_ago(6), "2");
    log_on(&temp, &days_ago(7), "4");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 7 days (1 entry):"));
}

#[test]
fn test_stats_honors_configured_window() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);
    log_on(&temp, &days_ago(10), "2");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["config", "window_days", "30"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 30 days (1 entry):"));
}

#[test]
fn test_stats_survives_corrupt_entries_file() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);

    fs::write(temp.path().join(".moodlog/entries.json"), "{{ garbage").unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 0"))
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_stats_level_up() {
    let temp = TempDir::new().unwrap();
    init_log(&temp);

    // Ten entries on ten consecutive past days reach exactly 200 XP
    for n in 0..10 {
        log_on(&temp, &days_ago(n), "1");
    }

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("XP: 200"))
        .stdout(predicate::str::contains("Level: 1"))
        .stdout(predicate::str::contains("Streak: 10 days"));
}
