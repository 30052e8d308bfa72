//! CLI integration tests.
//! Each test runs in its own temp directory so no stray datecalc.toml is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn datecalc(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("datecalc").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn diff_text_output() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["diff", "2000-01-01", "2026-02-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("26 years, 1 month, 17 days"))
        .stdout(predicate::str::contains("9,545"))
        .stdout(predicate::str::contains("(Saturday)"));
}

#[test]
fn diff_reversed_swaps_by_default() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["diff", "2023-03-01", "2023-02-28"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day"));
}

#[test]
fn diff_strict_reversed_fails() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["diff", "--strict", "2023-03-01", "2023-02-28"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("2023-03-01 is after 2023-02-28"));
}

#[test]
fn diff_json_output() {
    let dir = TempDir::new().unwrap();
    let output = datecalc(&dir)
        .args(["--format", "json", "diff", "2024-02-28", "2024-03-01"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "2024-02-28");
    assert_eq!(json["total_days"], 2);
    assert_eq!(json["total_weeks"], 0);
}

#[test]
fn invalid_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["weekday", "2023-04-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2023-04-31"));
}

#[test]
fn malformed_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["weekday", "04/01/2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn weekday_output() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["weekday", "2024-02-29"])
        .assert()
        .success()
        .stdout("2024-02-29 is a Thursday\n");
}

#[test]
fn add_month_clamps() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["add", "2023-01-31", "--months", "1"])
        .assert()
        .success()
        .stdout("2023-01-31 +1m = 2023-02-28 (Tuesday)\n");
}

#[test]
fn add_negative_flags_and_expression() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["add", "2024-03-01", "--days", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 2024-02-29"));

    datecalc(&dir)
        .args(["add", "2024-01-01", "--offset", "-1y2m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 2022-11-01"));
}

#[test]
fn add_subtract_weeks() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["add", "2024-01-05", "--weeks", "1", "--subtract"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 2023-12-29"));
}

#[test]
fn add_bad_offset_expression() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["add", "2024-01-01", "--offset", "+1q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown unit"));
}

#[test]
fn age_with_on_date() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["age", "1990-08-25", "--on", "2026-02-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("35 years, 5 months, 24 days"))
        .stdout(predicate::str::contains("Saturday, 1990-08-25"))
        .stdout(predicate::str::contains("2026-08-25 (Tuesday), turning 36, in 188 days"));
}

#[test]
fn age_birth_after_target_fails() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["age", "2030-01-01", "--on", "2026-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("birth date must not be after"));
}

#[test]
fn age_defaults_to_today() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["age", "1900-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Age:"));
}

#[test]
fn config_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("datecalc.toml"),
        "format = \"json\"\nstrict_order = true\n",
    )
    .unwrap();

    let output = datecalc(&dir)
        .args(["diff", "2024-01-01", "2024-12-31"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_days"], 365);

    datecalc(&dir)
        .args(["diff", "2024-12-31", "2024-01-01"])
        .assert()
        .failure();

    datecalc(&dir)
        .args(["--format", "text", "diff", "2024-01-01", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Difference:    1 day"));
}

#[test]
fn explicit_config_with_separator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "thousands_separator = \" \"\n").unwrap();

    datecalc(&dir)
        .arg("--config")
        .arg(&path)
        .args(["diff", "2000-01-01", "2026-02-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 545"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["--config", "nope.toml", "weekday", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    datecalc(&dir)
        .args(["-vv", "weekday", "2024-01-01"])
        .assert()
        .success()
        .stdout("2024-01-01 is a Monday\n");
}
