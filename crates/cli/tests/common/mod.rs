// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Fresh data directory, removed when dropped.
pub fn data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// `cellar --data-dir <dir>` isolated from the caller's environment.
pub fn cellar(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cellar").expect("cellar binary");
    cmd.env_remove("CELLAR_CONFIG")
        .env_remove("CELLAR_DATA_DIR")
        .env_remove("CELLAR_OWNER")
        .env_remove("CELLAR_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

/// Run a command with `--format json` and parse its stdout.
pub fn json(dir: &Path, args: &[&str]) -> Value {
    let output = cellar(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .expect("Failed to run cellar");
    assert!(
        output.status.success(),
        "cellar {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

/// Register the kinds most tests use: a 53 gal barrel and a 5000 gal tank.
pub fn register_kinds(dir: &Path) {
    json(dir, &["kind", "add", "--name", "Barrel", "--capacity", "53", "--tare", "110"]);
    json(dir, &["kind", "add", "--name", "Tank", "--capacity", "5000"]);
}

/// Create one container and return its id.
pub fn create(dir: &Path, kind: &str, name: &str, extra: &[&str]) -> String {
    let mut args = vec!["container", "create", "--kind", kind, "--name", name];
    args.extend_from_slice(extra);
    let created = json(dir, &args);
    created[0]["container"]["id"].as_str().expect("container id").to_string()
}

pub fn f64_at(value: &Value, pointer: &str) -> f64 {
    value
        .pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("no number at {pointer} in {value}"))
}
