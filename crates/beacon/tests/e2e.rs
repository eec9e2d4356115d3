// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the compiled `beacon` binary.
//!
//! Each test writes its own config file so the host's XDG config never leaks in.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use beacon_core::{CanonicalSessionRecord, SessionStatus};
use beacon_test_utils::PayloadBuilder;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

const NOW: &str = "2026-10-19T12:00:00Z";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn beacon(config: &str, args: &[&str], stdin: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("beacon.toml");
    std::fs::write(&config_path, config).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_beacon"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn records(output: &Output) -> Vec<CanonicalSessionRecord> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("stdout holds only records"))
        .collect()
}

#[test]
fn process_emits_canonical_records() {
    let input = [
        PayloadBuilder::new(now())
            .seq(42)
            .init(true)
            .duration(1947.49)
            .status(SessionStatus::Exited)
            .to_json(),
        PayloadBuilder::new(now())
            .seq(43)
            .status(SessionStatus::Crashed)
            .to_json(),
    ]
    .join("\n");

    let output = beacon(
        "",
        &["process", "--org-id", "1", "--project-id", "42", "--now", NOW],
        &input,
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let records = records(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sequence, 0);
    assert_eq!(records[0].duration, Some(1947.49));
    assert_eq!(records[0].distinct_id, "367e2499-2b45-586d-814f-778b60144e87");
    assert_eq!(records[1].sequence, 43);
    assert_eq!(records[1].error_count, 1);
    assert_eq!(records[1].duration, None);
}

#[test]
fn process_drops_and_rejects_silently_on_stdout() {
    let input = [
        PayloadBuilder::new(now())
            .started(now() - TimeDelta::days(5) - TimeDelta::hours(1))
            .to_json(),
        PayloadBuilder::new(now()).without("release").to_json(),
        "garbage".to_string(),
    ]
    .join("\n");

    let output = beacon(
        "[[projects]]\norg_id = 1\nproject_id = 42\nretention_days = 17\n",
        &["process", "--org-id", "1", "--project-id", "42", "--now", NOW],
        &input,
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn process_uses_project_retention() {
    let input = PayloadBuilder::new(now()).started(now()).to_json();
    let output = beacon(
        "[[projects]]\norg_id = 1\nproject_id = 42\nretention_days = 17\n",
        &["process", "--org-id", "1", "--project-id", "42", "--now", NOW],
        &input,
    );

    assert_eq!(records(&output)[0].retention_days, 17);
}

#[test]
fn metrics_are_rendered_to_stderr() {
    let input = PayloadBuilder::new(now()).to_json();
    let output = beacon(
        "[metrics]\nenabled = true\n",
        &["process", "--org-id", "1", "--project-id", "42", "--now", NOW],
        &input,
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("beacon_sessions_accepted_total"));
}

#[test]
fn distinct_id_command_prints_derived_id() {
    let output = beacon("", &["distinct-id", "foobarbaz"], "");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "367e2499-2b45-586d-814f-778b60144e87"
    );

    let output = beacon("", &["distinct-id"], "");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn invalid_config_fails_check() {
    let output = beacon("[limits]\nmax_secs_in_futur = 1\n", &["check-config"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_secs_in_future"));

    let output = beacon("", &["check-config"], "");
    assert!(output.status.success());
}
