//! Read-only access to daily record documents (one JSON file per day).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::models::DailyRecord;

pub fn load_record(path: &Path) -> Result<DailyRecord, RecordError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RecordError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON files directly inside `dir`, sorted by name.
fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, RecordError> {
    let entries = std::fs::read_dir(dir).map_err(|source| RecordError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| RecordError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        } else {
            log::debug!("skipping {:?}", path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every record reachable from `paths` (files, or directories of `*.json`).
///
/// The result is ordered by date. When two documents share a date the one
/// loaded last wins.
pub fn load_records(paths: &[PathBuf]) -> Result<Vec<DailyRecord>, RecordError> {
    let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();

    for path in paths {
        let files = if path.is_dir() {
            json_files_in(path)?
        } else if path.is_file() {
            vec![path.clone()]
        } else {
            return Err(RecordError::NotFound(path.clone()));
        };

        for file in files {
            let record = load_record(&file)?;
            if by_date.contains_key(&record.date) {
                log::warn!(
                    "duplicate record for {}; using {:?}",
                    record.date_key(),
                    file
                );
            }
            by_date.insert(record.date, record);
        }
    }

    Ok(by_date.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).expect("record should write");
        path
    }

    #[test]
    fn load_record_reports_path_on_bad_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write(dir.path(), "bad.json", "{ not json");
        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, RecordError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn load_record_rejects_out_of_range_presence() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write(
            dir.path(),
            "day.json",
            r#"{"date": "2024-03-11", "prayers": {"fajr": {"performed": true, "presence": 7}}}"#,
        );
        assert!(matches!(load_record(&path), Err(RecordError::Parse { .. })));
    }

    #[test]
    fn load_record_rejects_misspelled_counter() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write(
            dir.path(),
            "day.json",
            r#"{"date": "2024-03-11", "remembrance": {"counters": {"istigfar": 30}}}"#,
        );
        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, RecordError::Parse { .. }));
        assert!(format!("{:?}", err).contains("istigfar"));
    }

    #[test]
    fn load_records_sorts_by_date_and_skips_other_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        write(dir.path(), "b.json", r#"{"date": "2024-03-12"}"#);
        write(dir.path(), "a.json", r#"{"date": "2024-03-13"}"#);
        write(dir.path(), "notes.txt", "ignored");
        fs::create_dir(dir.path().join("nested")).unwrap();

        let records = load_records(&[dir.path().to_path_buf()]).expect("load should succeed");
        let dates: Vec<String> = records.iter().map(|r| r.date_key()).collect();
        assert_eq!(dates, vec!["2024-03-12", "2024-03-13"]);
    }

    #[test]
    fn later_duplicate_wins() {
        let dir = TempDir::new().expect("temp dir should be created");
        let first = write(dir.path(), "one.json", r#"{"date": "2024-03-12"}"#);
        let second = write(
            dir.path(),
            "two.json",
            r#"{"date": "2024-03-12", "has_burden": true}"#,
        );
        let records = load_records(&[first, second]).expect("load should succeed");
        assert_eq!(records.len(), 1);
        assert!(records[0].has_burden);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            load_records(&[missing]),
            Err(RecordError::NotFound(_))
        ));
    }
}
