//! Entries-file loading
//!
//! Entries arrive pre-populated from an external file, either JSON (an
//! `entries` envelope) or CSV with `id,title,type,value` headers, selected by
//! file extension. Loading validates each entry and id uniqueness. There is
//! deliberately no save counterpart: session edits are never written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::Entry;

/// Serializable entries file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EntriesFile {
    entries: Vec<Entry>,
}

/// Load and validate an entries file
pub fn load_entries(path: &Path) -> TallyResult<Vec<Entry>> {
    let entries = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => read_csv(path)?,
        _ => read_json(path)?,
    };
    validate_entries(&entries)?;
    Ok(entries)
}

/// Read a JSON entries file
fn read_json(path: &Path) -> TallyResult<Vec<Entry>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TallyError::Io(format!(
            "Failed to read entries file {}: {}",
            path.display(),
            e
        ))
    })?;

    let file: EntriesFile = serde_json::from_str(&contents).map_err(|e| {
        TallyError::Json(format!(
            "Failed to parse entries file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(file.entries)
}

/// Read a CSV entries file
fn read_csv(path: &Path) -> TallyResult<Vec<Entry>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        TallyError::Csv(format!(
            "Failed to read entries file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: Entry = record?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Check per-entry validity and collection-wide id uniqueness
fn validate_entries(entries: &[Entry]) -> TallyResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        entry.validate()?;
        if !seen.insert(entry.id) {
            return Err(TallyError::duplicate_entry(entry.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "entries.json",
            r#"{
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
            }"#,
        );

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Coffee");
        assert_eq!(entries[0].kind, EntryKind::Expense);
        assert_eq!(entries[1].value, 2000.0);
    }

    #[test]
    fn test_load_csv_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "entries.csv",
            "id,title,type,value\n\
             550e8400-e29b-41d4-a716-446655440000,Coffee,expense,4.5\n\
             550e8400-e29b-41d4-a716-446655440001,Salary,income,2000\n",
        );

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title, "Salary");
        assert_eq!(entries[1].kind, EntryKind::Income);
        assert_eq!(entries[0].value, 4.5);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "entries.json",
            r#"{
                "entries": [
                    {
                        "id": "550e8400-e29b-41d4-a716-446655440000",
                        "title": "Coffee",
                        "type": "expense",
                        "value": 4.5
                    },
                    {
                        "id": "550e8400-e29b-41d4-a716-446655440000",
                        "title": "Tea",
                        "type": "expense",
                        "value": 3.0
                    }
                ]
            }"#,
        );

        let err = load_entries(&path).unwrap_err();
        assert!(matches!(err, TallyError::Duplicate { .. }));
    }

    #[test]
    fn test_load_rejects_negative_values() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "entries.json",
            r#"{
                "entries": [
                    {
                        "id": "550e8400-e29b-41d4-a716-446655440000",
                        "title": "Coffee",
                        "type": "expense",
                        "value": -4.5
                    }
                ]
            }"#,
        );

        let err = load_entries(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_entries(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TallyError::Io(_)));
    }
}
