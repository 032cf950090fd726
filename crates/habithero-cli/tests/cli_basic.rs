//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a temporary data directory and verify
//! outputs.

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run a CLI command inside `data_dir` and return (stdout, stderr, exit code).
fn run_cli(data_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habithero"))
        .args(args)
        .env("HABITHERO_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command and expect success.
fn run_ok(data_dir: &TempDir, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn run_json(data_dir: &TempDir, args: &[&str]) -> Value {
    let stdout = run_ok(data_dir, args);
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

/// Fresh data dir with cues off and a daily 1000 habit saving toward `target`.
fn initialized(target: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    run_ok(&dir, &["config", "set", "feedback.cues", "false"]);
    run_ok(
        &dir,
        &[
            "init",
            "--habit-type",
            "smoking",
            "--cost",
            "1000",
            "--frequency",
            "daily",
            "--goal-name",
            "Headphones",
            "--goal-target",
            target,
        ],
    );
    dir
}

#[test]
fn test_status_before_init_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["status"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("No active habit"), "stderr: {stderr}");
}

#[test]
fn test_init_writes_state_document() {
    let dir = initialized("5000");
    assert!(dir.path().join("dependency_wallet_data.json").exists());

    let raw = run_ok(&dir, &["status"]);
    assert!(!raw.contains("-0.0"), "status: {raw}");
    let status: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(status["habitName"], "Smoking");
    assert_eq!(status["dailySavings"], 1000.0);
    assert_eq!(status["totalSaved"], 0.0);
    assert_eq!(status["streak"], 0);
    assert_eq!(status["goal"]["daysRemaining"], 5);
}

#[test]
fn test_init_twice_needs_force() {
    let dir = initialized("5000");
    let args = [
        "init",
        "--habit-type",
        "coffee",
        "--cost",
        "200",
        "--frequency",
        "weekly",
        "--goal-name",
        "Bike",
        "--goal-target",
        "9000",
    ];
    let (_, _, code) = run_cli(&dir, &args);
    assert_ne!(code, 0);

    let mut forced = args.to_vec();
    forced.push("--force");
    run_ok(&dir, &forced);
    let habit = run_json(&dir, &["habit", "show"]);
    assert_eq!(habit["habit"]["type"], "COFFEE");
}

#[test]
fn test_init_rejects_other_without_name() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(
        &dir,
        &[
            "init",
            "--habit-type",
            "other",
            "--cost",
            "100",
            "--frequency",
            "daily",
            "--goal-name",
            "Bike",
            "--goal-target",
            "9000",
        ],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("customName"), "stderr: {stderr}");
}

#[test]
fn test_check_in_then_relapse_same_day() {
    let dir = initialized("5000");

    let out = run_json(&dir, &["check-in"]);
    assert_eq!(out["record"]["isSuccessful"], true);
    assert_eq!(out["record"]["amountSaved"], 1000.0);
    let events = out["events"].as_array().unwrap();
    assert_eq!(events[0]["type"], "CheckedIn");
    assert!(events
        .iter()
        .any(|e| e["type"] == "AchievementUnlocked" && e["achievementId"] == "first_day"));

    let status = run_json(&dir, &["status"]);
    assert_eq!(status["totalSaved"], 1000.0);
    assert_eq!(status["successfulDays"], 1);
    assert_eq!(status["streak"], 1);

    let relapse = run_json(&dir, &["relapse"]);
    assert!(relapse["events"][0]["at"].is_i64());
    let raw = run_ok(&dir, &["status"]);
    assert!(!raw.contains("-0.0"), "status: {raw}");
    let status: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(status["totalSaved"], 0.0);
    assert_eq!(status["today"]["isSuccessful"], false);
}

#[test]
fn test_achievements_listing() {
    let dir = initialized("5000");
    let all = run_json(&dir, &["achievements"]);
    assert_eq!(all.as_array().unwrap().len(), 5);

    run_ok(&dir, &["check-in"]);
    let unlocked = run_json(&dir, &["achievements", "--unlocked"]);
    let unlocked = unlocked.as_array().unwrap();
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0]["id"], "first_day");
}

#[test]
fn test_history_and_calendar() {
    let dir = initialized("5000");
    run_ok(&dir, &["check-in"]);

    let series = run_json(&dir, &["history", "--days", "5"]);
    let series = series.as_array().unwrap();
    assert_eq!(series.len(), 5);
    assert_eq!(series[4]["total"], 1000.0);

    let default_window = run_json(&dir, &["history"]);
    assert_eq!(default_window.as_array().unwrap().len(), 14);

    for days in ["100000000", "0"] {
        let (_, stderr, code) = run_cli(&dir, &["history", "--days", days]);
        assert_eq!(code, 2, "--days {days}: {stderr}");
        assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    }
    let (_, _, code) = run_cli(&dir, &["config", "set", "display.history_days", "100000000"]);
    assert_eq!(code, 1);
    assert_eq!(default_window, run_json(&dir, &["history"]));

    let calendar = run_json(&dir, &["calendar"]);
    let days = calendar["days"].as_array().unwrap();
    assert!(days.len() >= 28);
    assert!(days
        .iter()
        .any(|d| d["isToday"] == true && d["status"] == "success"));
}

#[test]
fn test_goal_reached_share_and_archive() {
    let dir = initialized("800");

    let (_, _, code) = run_cli(&dir, &["share"]);
    assert_ne!(code, 0, "share must wait for the goal");

    let out = run_json(&dir, &["check-in"]);
    assert!(out["events"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["type"] == "GoalReached"));

    let text = run_ok(&dir, &["share"]);
    assert!(text.contains("Headphones"));
    assert!(text.contains("1000₽"));

    let event = run_json(&dir, &["goal", "archive"]);
    assert_eq!(event["type"], "GoalArchived");
    assert_eq!(event["daysToAchieve"], 1);

    let shown = run_json(&dir, &["goal", "show"]);
    assert!(shown["goal"].is_null());
    assert_eq!(shown["totalSaved"], 0.0);
    assert_eq!(shown["achievedGoals"].as_array().unwrap().len(), 1);

    let (_, _, code) = run_cli(&dir, &["goal", "archive"]);
    assert_eq!(code, 1);
}

#[test]
fn test_archive_before_goal_is_reached_fails() {
    let dir = initialized("5000");
    run_ok(&dir, &["check-in"]);

    let (_, stderr, code) = run_cli(&dir, &["goal", "archive"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Goal not reached"), "stderr: {stderr}");

    let shown = run_json(&dir, &["goal", "show"]);
    assert_eq!(shown["goal"]["name"], "Headphones");
    assert_eq!(shown["totalSaved"], 1000.0);
    assert!(shown["achievedGoals"].as_array().unwrap().is_empty());
}

#[test]
fn test_goal_set_from_suggestions() {
    let dir = initialized("800");
    let suggestions = run_json(&dir, &["goal", "suggest"]);
    let first = &suggestions.as_array().unwrap()[0];

    let goal = run_json(&dir, &["goal", "set", "--suggested", "1"]);
    assert_eq!(goal["name"], first["name"]);
    assert_eq!(goal["targetAmount"], first["price"]);

    let goal = run_json(&dir, &["goal", "set", "--name", "Bike", "--target", "12000"]);
    assert_eq!(goal["name"], "Bike");

    let (_, _, code) = run_cli(&dir, &["goal", "set", "--name", "Nothing", "--target", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_settings_and_reminder() {
    let dir = initialized("5000");

    let settings = run_json(&dir, &["settings", "reminder-time", "07:30"]);
    assert_eq!(settings["dailyReminderTime"], "07:30");

    let (_, _, code) = run_cli(&dir, &["settings", "reminder-time", "7:30"]);
    assert_ne!(code, 0);

    let planned = run_json(&dir, &["remind"]);
    assert_eq!(planned["scheduled"], true);
    let delay = planned["reminder"]["delay"].as_i64().unwrap();
    assert!(delay > 0 && delay <= 24 * 3600);

    let settings = run_json(&dir, &["settings", "daily-reminder", "off"]);
    assert_eq!(settings["dailyReminder"], false);
    let planned = run_json(&dir, &["remind"]);
    assert_eq!(planned["scheduled"], false);

    let settings = run_json(&dir, &["settings", "theme", "dark"]);
    assert_eq!(settings["theme"], "dark");
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_ok(&dir, &["config", "get", "display.currency_symbol"]).trim(), "₽");

    run_ok(&dir, &["config", "set", "display.currency_symbol", "$"]);
    assert_eq!(run_ok(&dir, &["config", "get", "display.currency_symbol"]).trim(), "$");

    let (_, _, code) = run_cli(&dir, &["config", "get", "display.nope"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(&dir, &["config", "set", "display.history_days", "many"]);
    assert_eq!(code, 1);

    run_ok(&dir, &["config", "reset"]);
    let list = run_json(&dir, &["config", "list"]);
    assert_eq!(list["display"]["currency_symbol"], "₽");
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = initialized("5000");
    let (_, _, code) = run_cli(&dir, &["reset"]);
    assert_ne!(code, 0);
    run_ok(&dir, &["status"]);

    run_ok(&dir, &["reset", "--yes"]);
    let (_, _, code) = run_cli(&dir, &["status"]);
    assert_eq!(code, 1);
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let script = run_ok(&dir, &["completions", "bash"]);
    assert!(script.contains("habithero"));
}
