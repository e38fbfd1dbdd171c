//! Dataset file loading
//!
//! A dataset is a single JSON file with one array per collection;
//! absent collections default to empty. Unreadable files and malformed
//! JSON are distinct errors, both fatal to the invoking command.

use std::fs;
use std::path::Path;

use super::errors::{DatasetError, DatasetResult};
use super::store::Dataset;

/// Loads a dataset from a JSON file.
pub fn load(path: &Path) -> DatasetResult<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| DatasetError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a dataset to a JSON file (pretty-printed, for fixtures and
/// round-trip tests).
pub fn save(dataset: &Dataset, path: &Path) -> DatasetResult<()> {
    let content = serde_json::to_string_pretty(dataset).map_err(|e| DatasetError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, content).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::model::District;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(DatasetError::Malformed { .. })));
    }

    #[test]
    fn test_absent_collections_default_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("partial.json");
        fs::write(&path, r#"{"districts": []}"#).unwrap();

        let ds = load(&path).unwrap();
        assert!(ds.districts.is_empty());
        assert!(ds.students.is_empty());
        assert!(ds.notes.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");

        let mut ds = Dataset::new();
        ds.districts.push(District {
            id: 5,
            code: "D05".into(),
            city: "Denver".into(),
            state: "CO".into(),
            name: "Denver Public".into(),
        });
        save(&ds, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.districts, ds.districts);
    }
}
