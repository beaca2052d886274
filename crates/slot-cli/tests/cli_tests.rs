//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the events and
//! stored subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: path to the stored.json fixture.
fn stored_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/stored.json")
}

/// Helper: read the events.json fixture as a string.
fn events_json() -> String {
    std::fs::read_to_string(events_json_path()).expect("events.json fixture must exist")
}

const RANGE: &str = "03/16/2026 - 03/17/2026";

// ─────────────────────────────────────────────────────────────────────────────
// Events subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn events_stdin_to_stdout() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["events", "--range", RANGE, "--open", "9:00", "--close", "17:00", "--duration", "30"])
        .write_stdin(events_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon, Mar 16, 9:00 am to 10:00 am."))
        .stdout(predicate::str::contains("Mon, Mar 16, 11:00 am to 5:00 pm."))
        .stdout(predicate::str::contains("Tue, Mar 17, 9:00 am to 5:00 pm."));
}

#[test]
fn events_from_file() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "events",
            "-i",
            events_json_path(),
            "--range",
            RANGE,
            "--open",
            "9am",
            "--close",
            "5pm",
            "--duration",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon, Mar 16, 9:00 am to 10:00 am."));
}

#[test]
fn events_writes_the_anonymized_busy_file() {
    let busy_path = "/tmp/slots-test-busy-out.json";
    let _ = std::fs::remove_file(busy_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "events",
            "-i",
            events_json_path(),
            "--range",
            RANGE,
            "--open",
            "9:00",
            "--close",
            "17:00",
            "--duration",
            "30",
            "--busy-out",
            busy_path,
        ])
        .assert()
        .success();

    let busy = std::fs::read_to_string(busy_path).expect("busy output file must exist");
    // The overlapping events merged into one block...
    assert!(busy.contains("2026-03-16T10:00:00"));
    assert!(busy.contains("2026-03-16T11:00:00"));
    // ...and nothing in storage carries an event name.
    assert!(!busy.contains("summary"));
    assert!(!busy.contains("Standup"));

    let _ = std::fs::remove_file(busy_path);
}

#[test]
fn events_with_an_unmeetable_minimum_report_no_free_time() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["events", "--range", RANGE, "--open", "9:00", "--close", "17:00", "--duration", "600"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shared free time in this range."));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stored subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stored_from_file() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["stored", "-i", stored_json_path(), "--range", RANGE, "--duration", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mon, Mar 16, 12:00 pm to Tue, Mar 17, 12:00 am.",
        ));
}

#[test]
fn stored_with_nothing_accumulated_offers_the_whole_range() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["stored", "--range", RANGE, "--duration", "30"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mon, Mar 16, 12:00 am to Tue, Mar 17, 12:00 am.",
        ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bad_open_time_fails_with_the_field_name() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["events", "--range", RANGE, "--open", "noonish", "--close", "17:00", "--duration", "30"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed instant in open"));
}

#[test]
fn reversed_range_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "stored",
            "--range",
            "03/17/2026 - 03/16/2026",
            "--duration",
            "30",
        ])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("range ends before it starts"));
}

#[test]
fn invalid_timezone_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["stored", "--range", RANGE, "--duration", "30", "--timezone", "Mars/Olympus"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timezone"));
}

#[test]
fn garbage_input_fails_with_context() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["stored", "--range", RANGE, "--duration", "30"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array of busy pairs"));
}

#[test]
fn missing_subcommand_prints_usage() {
    Command::cargo_bin("slots")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
