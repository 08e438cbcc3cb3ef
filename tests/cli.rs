//! Integration tests for the non-interactive CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `tally` command with an isolated data directory
fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd.env_remove("TALLY_ENTRIES_FILE");
    cmd
}

fn write_entries_json(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const TWO_ENTRIES: &str = r#"{
    "entries": [
        {
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Coffee",
            "type": "expense",
            "value": 4.5
        },
        {
            "id": "550e8400-e29b-41d4-a716-446655440001",
            "title": "Salary",
            "type": "income",
            "value": 2000.0
        }
    ]
}"#;

#[test]
fn list_prints_entries_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_entries_json(&dir, "my-entries.json", TWO_ENTRIES);

    tally(&dir)
        .args(["list", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("-$4.50"))
        .stdout(predicate::str::contains("+$2000.00"));
}

#[test]
fn list_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    let path = write_entries_json(&dir, "my-entries.json", TWO_ENTRIES);

    tally(&dir)
        .args(["list", "--kind", "income", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Coffee").not());
}

#[test]
fn list_empty_collection_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = write_entries_json(&dir, "empty.json", r#"{"entries": []}"#);

    tally(&dir)
        .args(["list", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no entries."));
}

#[test]
fn list_without_entries_file_uses_samples() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn list_with_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["list", "--file"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read entries file"));
}

#[test]
fn list_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["list", "--kind", "food"])
        .assert()
        .failure();
}

#[test]
fn config_prints_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tally Configuration"))
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains(
            dir.path().to_string_lossy().to_string(),
        ));
}

#[test]
fn csv_entries_file_is_supported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.csv");
    std::fs::write(
        &path,
        "id,title,type,value\n\
         550e8400-e29b-41d4-a716-446655440000,Coffee,expense,4.5\n",
    )
    .unwrap();

    tally(&dir)
        .args(["list", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("-$4.50"));
}
