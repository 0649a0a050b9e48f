use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wayfare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wayfare").expect("Failed to find wayfare binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper that plans a Paris trip with one guest, making it the current trip
fn plan_paris_trip(db_arg: &str) {
    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "new",
            "--destination",
            "Paris",
            "--day",
            "2024-05-05",
            "--day",
            "2024-05-10",
            "--invite",
            "ana@example.com",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_trip_new_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "new",
            "--destination",
            "Paris",
            "--day",
            "2024-05-10",
            "--day",
            "2024-05-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip created."))
        .stdout(predicate::str::contains("Paris, 05 May - 10 May"));
}

#[test]
fn test_cli_trip_show_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trip planned yet."));
}

#[test]
fn test_cli_default_command_shows_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trip planned yet."));
}

#[test]
fn test_cli_trip_show_resumes_created_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args(["--database-file", db_arg, "trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trip"))
        .stdout(predicate::str::contains("Paris, 05 May - 10 May"));
}

#[test]
fn test_cli_trip_new_short_destination() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "new",
            "--destination",
            "Rio",
            "--day",
            "2024-05-05",
            "--day",
            "2024-05-10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4 characters"));
}

#[test]
fn test_cli_trip_new_incomplete_dates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "new",
            "--destination",
            "Paris",
            "--day",
            "2024-05-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "fill in the destination and both trip dates",
        ));
}

#[test]
fn test_cli_trip_new_invalid_invite() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "new",
            "--destination",
            "Paris",
            "--day",
            "2024-05-05",
            "--day",
            "2024-05-10",
            "--invite",
            "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid e-mail address"));
}

#[test]
fn test_cli_trip_update() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "update",
            "--destination",
            "Porto",
            "--day",
            "2024-06-01",
            "--day",
            "2024-06-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip updated."))
        .stdout(predicate::str::contains("Porto, 01 Jun - 04 Jun"));
}

#[test]
fn test_cli_trip_forget() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args(["--database-file", db_arg, "trip", "forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current trip forgotten."));

    wayfare_cmd()
        .args(["--database-file", db_arg, "trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trip planned yet."));
}

#[test]
fn test_cli_activity_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "activity",
            "add",
            "--title",
            "Morning run",
            "--day",
            "2024-05-06",
            "--hour",
            "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Activity added."))
        .stdout(predicate::str::contains("09:00 am — Morning run"));

    wayfare_cmd()
        .args(["--database-file", db_arg, "activity", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 6"))
        .stdout(predicate::str::contains("09:00 am — Morning run"));
}

#[test]
fn test_cli_activity_add_outside_trip_dates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "activity",
            "add",
            "--title",
            "Out of range",
            "--day",
            "2024-07-01",
            "--hour",
            "9",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_activity_without_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "activity",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No trip planned yet"));
}

#[test]
fn test_cli_link_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "link",
            "add",
            "--title",
            "Booking",
            "--url",
            "https://example.com/stay",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link saved."))
        .stdout(predicate::str::contains("https://example.com/stay"));

    wayfare_cmd()
        .args(["--database-file", db_arg, "link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Booking**"));
}

#[test]
fn test_cli_link_add_invalid_url() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args([
            "--database-file",
            db_arg,
            "link",
            "add",
            "--title",
            "Booking",
            "--url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid link"));
}

#[test]
fn test_cli_guest_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    plan_paris_trip(db_arg);

    wayfare_cmd()
        .args(["--database-file", db_arg, "guest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ana@example.com"))
        .stdout(predicate::str::contains("pending"));
}

#[test]
fn test_cli_help_output() {
    wayfare_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("trip"))
        .stdout(predicate::str::contains("activity"))
        .stdout(predicate::str::contains("link"))
        .stdout(predicate::str::contains("guest"));
}

#[test]
fn test_cli_trip_help() {
    wayfare_cmd()
        .args(["trip", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("forget"));
}

#[test]
fn test_cli_version_output() {
    wayfare_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wayfare "));
}
