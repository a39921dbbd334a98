//! Integration tests for the journalsplit CLI
//!
//! These tests run the real binary against a temporary directory tree
//! holding a config file and plaintext journals.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a journalsplit command
fn journalsplit() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("journalsplit"))
}

/// Lay out a workspace with one two-entry journal for 2020
fn two_entry_workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::create_dir(dir.path().join("plaintexts")).unwrap();
    fs::write(
        dir.path().join("plaintexts/test-journal.txt"),
        "My Title\nJan 1, 2020\n\n\nBody line.\n\nNext Title\nFeb 2, 2020\n\n\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"[{
            "year": 2020,
            "input_filename": "test-journal",
            "expected_output": 2,
            "buffer_size": 4,
            "buffer_title_index": 0,
            "buffer_date_index": 1
        }]"#,
    )
    .unwrap();
    dir
}

fn entry_dir(root: &Path) -> std::path::PathBuf {
    root.join("entries-new").join("2020")
}

#[test]
fn split_writes_one_file_per_entry() {
    let dir = two_entry_workspace();

    journalsplit()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success! 2 entries written from test-journal.txt",
        ))
        .stdout(predicate::str::contains("TOTAL ENTRY COUNT: 2"));

    let entries = entry_dir(dir.path());
    assert!(entries.join("header.txt").exists());

    let first = fs::read_to_string(entries.join("(2020-01-01) My Title.txt")).unwrap();
    assert!(first.starts_with(
        "Title: My Title\nDate: Jan 1, 2020\n++++++++++++++++++++++++++++++++++++\n\n"
    ));
    assert!(first.contains("Body line.\n"));

    let second = fs::read_to_string(entries.join("(2020-02-02) Next Title.txt")).unwrap();
    assert!(second.starts_with("Title: Next Title\nDate: Feb 2, 2020\n"));
}

#[test]
fn count_mismatch_warns_but_succeeds() {
    let dir = two_entry_workspace();
    fs::write(
        dir.path().join("config.json"),
        r#"[{
            "year": 2020,
            "input_filename": "test-journal",
            "expected_output": 3,
            "buffer_size": 4,
            "buffer_title_index": 0,
            "buffer_date_index": 1
        }]"#,
    )
    .unwrap();

    journalsplit()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WARNING: expected 3 entries, found 2 in test-journal.txt",
        ));
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = two_entry_workspace();

    journalsplit()
        .current_dir(dir.path())
        .args(["split", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL ENTRY COUNT: 2"));

    assert!(!dir.path().join("entries-new").exists());
}

#[test]
fn json_mode_emits_a_machine_readable_report() {
    let dir = two_entry_workspace();

    let output = journalsplit()
        .current_dir(dir.path())
        .args(["--json", "split"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["total_entries"], 2);
    assert_eq!(report["journals"][0]["journal"], "test-journal");
    assert_eq!(report["journals"][0]["matched"], true);
}

#[test]
fn char_clean_pass_produces_a_sibling_and_splits_it() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("plaintexts")).unwrap();
    // U+2028 where the newline between title and date belongs
    fs::write(
        dir.path().join("plaintexts/unicode-journal.txt"),
        "My Title\u{2028}Jan 1, 2020\n\n\nBody.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"[{
            "year": 2020,
            "input_filename": "unicode-journal",
            "expected_output": 1,
            "needs_char_clean": true,
            "buffer_size": 4,
            "buffer_title_index": 0,
            "buffer_date_index": 1
        }]"#,
    )
    .unwrap();

    journalsplit()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! 1 entries"));

    assert!(dir
        .path()
        .join("plaintexts/unicode-journal-charcleaned.txt")
        .exists());
    assert!(entry_dir(dir.path())
        .join("(2020-01-01) My Title.txt")
        .exists());
}

#[test]
fn whitelisted_date_rescues_an_unparseable_line() {
    let dir = two_entry_workspace();
    fs::write(
        dir.path().join("plaintexts/test-journal.txt"),
        "My Title\nBlornsday the 32nd, 2020\n\n\nBody.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"[{
            "year": 2020,
            "input_filename": "test-journal",
            "expected_output": 1,
            "buffer_size": 4,
            "buffer_title_index": 0,
            "buffer_date_index": 1,
            "whitelist_dates": {"Blornsday the 32nd, 2020": "2020-03-02"}
        }]"#,
    )
    .unwrap();

    journalsplit()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .success();
    assert!(entry_dir(dir.path())
        .join("(2020-03-02) My Title.txt")
        .exists());
}

#[test]
fn malformed_config_is_fatal() {
    let dir = two_entry_workspace();
    fs::write(
        dir.path().join("config.json"),
        r#"[{"year": 2020, "input_filename": "test-journal"}]"#,
    )
    .unwrap();

    journalsplit()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn version_prints_the_crate_version() {
    journalsplit()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
