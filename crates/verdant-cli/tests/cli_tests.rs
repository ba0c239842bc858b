use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command for the verdant binary
fn verdant_cmd() -> Command {
    Command::cargo_bin("verdant").expect("Failed to find verdant binary")
}

/// Extract the reminder ID from `add` output ("Created reminder with ID: x")
fn extract_id(stdout: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created reminder with ID: "))
        .expect("add output should contain the reminder ID")
        .trim()
        .to_string()
}

#[test]
fn test_cli_add_reminder_success() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args([
            "--data-dir",
            data_arg,
            "add",
            "Water the monstera",
            "Monstera",
            "--in",
            "2h",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created reminder with ID: "))
        .stdout(predicate::str::contains("# Water the monstera (Monstera)"))
        .stdout(predicate::str::contains("- Notification: scheduled ("));
}

#[test]
fn test_cli_add_with_description() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args([
            "--data-dir",
            data_arg,
            "add",
            "Mist",
            "Calathea",
            "--description",
            "twice, lukewarm",
            "--in",
            "45m",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Notes: twice, lukewarm"));
}

#[test]
fn test_cli_add_rejects_blank_title() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args(["--data-dir", data_arg, "add", "   ", "Fern", "--in", "2h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required field 'title'"));
}

#[test]
fn test_cli_add_rejects_past_instants() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args([
            "--data-dir",
            data_arg,
            "add",
            "Water",
            "Fern",
            "--at",
            "2020-01-01T00:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least"));
}

#[test]
fn test_cli_add_requires_a_schedule() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args(["--data-dir", data_arg, "add", "Water", "Fern"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args(["--data-dir", data_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No watering reminders scheduled."));
}

#[test]
fn test_cli_add_then_list() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args(["--data-dir", data_arg, "add", "Water", "Fern", "--in", "1h"])
        .assert()
        .success();

    verdant_cmd()
        .args(["--data-dir", data_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Watering Reminders"))
        .stdout(predicate::str::contains("Water (Fern)"));
}

#[test]
fn test_cli_show_reminder() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    let output = verdant_cmd()
        .args(["--data-dir", data_arg, "add", "Water", "Fern", "--in", "1h"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    verdant_cmd()
        .args(["--data-dir", data_arg, "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("- ID: {id}")));

    verdant_cmd()
        .args(["--data-dir", data_arg, "show", "no-such-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reminder with ID"));
}

#[test]
fn test_cli_remove_is_idempotent() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    let output = verdant_cmd()
        .args(["--data-dir", data_arg, "add", "Water", "Fern", "--in", "1h"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    verdant_cmd()
        .args(["--data-dir", data_arg, "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed reminder"));

    // Removing the same ID again is a no-op success.
    verdant_cmd()
        .args(["--data-dir", data_arg, "remove", &id])
        .assert()
        .success();

    verdant_cmd()
        .args(["--data-dir", data_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No watering reminders scheduled."));
}

#[test]
fn test_cli_data_files_live_in_the_data_dir() {
    let temp_dir = create_cli_test_environment();
    let data_arg = temp_dir.path().to_str().unwrap();

    verdant_cmd()
        .args(["--data-dir", data_arg, "add", "Water", "Fern", "--in", "1h"])
        .assert()
        .success();

    assert!(temp_dir.path().join("events.json").exists());
    assert!(temp_dir.path().join("notifications.json").exists());
    assert!(temp_dir.path().join("calendar.json").exists());
}
