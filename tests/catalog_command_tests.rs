//! Catalog command integration tests

mod common;

use std::io::Write;

use common::patchlag_cmd;
use predicates::prelude::*;

#[test]
fn test_catalog_lists_builtin_releases() {
    patchlag_cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Known feature releases"))
        .stdout(predicate::str::contains("Windows 11"))
        .stdout(predicate::str::contains("22H2"))
        .stdout(predicate::str::contains("support.microsoft.com"));
}

#[test]
fn test_catalog_json_is_parseable() {
    let output = patchlag_cmd()
        .args(["catalog", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value =
        serde_json::from_slice(&output).expect("catalog --json must emit valid JSON");
    let entries = entries.as_array().expect("expected a JSON array");
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.get("product").is_some()));
    assert!(entries.iter().all(|e| e.get("history_uri").is_some()));
}

#[test]
fn test_catalog_replacement_file() {
    let mut table = tempfile::NamedTempFile::new().expect("temp catalog");
    writeln!(
        table,
        r#"releases:
  - product: Windows 12
    version: 26H1
    initial_build: "30000.100"
    initial_release_date: 2026-04-01
    history_uri: "https://support.microsoft.com/en-us/topic/windows-12-update-history"
"#
    )
    .expect("write temp catalog");

    patchlag_cmd()
        .args(["catalog", "--catalog", &table.path().display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Windows 12"))
        .stdout(predicate::str::contains("30000.100"));
}

#[test]
fn test_catalog_rejects_duplicate_rows() {
    let mut table = tempfile::NamedTempFile::new().expect("temp catalog");
    writeln!(
        table,
        r#"releases:
  - product: Windows 11
    version: 22H2
    initial_release_date: 2022-09-20
    history_uri: "https://example.com/a"
  - product: Windows 11
    version: 22H2
    initial_release_date: 2022-09-20
    history_uri: "https://example.com/b"
"#
    )
    .expect("write temp catalog");

    patchlag_cmd()
        .args(["catalog", "--catalog", &table.path().display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate entry"));
}
