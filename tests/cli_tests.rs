//! Binary Exit Behavior Tests
//!
//! Runs the built `mission-list` executable against throwaway configs and
//! checks exit status and what gets reported.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mission-list"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("MISSION_LIST_CONFIG")
        .env("RUST_LOG", "error")
        .output()
        .expect("spawn mission-list")
}

#[test]
fn missing_config_fails_and_reports_once() {
    let tmp = TempDir::new().expect("tempdir");
    let out = run_in(&tmp, &["--config", "does-not-exist.toml"]);

    assert!(!out.status.success());
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(combined.matches("Failed to load config").count(), 1, "{combined}");
    assert!(!tmp.path().join("src").exists());
}

#[test]
fn bundled_run_writes_default_page() {
    let tmp = TempDir::new().expect("tempdir");
    let out = run_in(&tmp, &[]);

    assert!(out.status.success());
    let html = std::fs::read_to_string(tmp.path().join("src/index.html")).expect("read page");
    assert!(html.starts_with("<!DOCTYPE html>"));
}
