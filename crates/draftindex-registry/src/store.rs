//! Persistence of the shortname-to-timestamp index.
//!
//! The index is the canonical "last updated" source for other tooling, so
//! it is written as key-sorted, 2-space-indented JSON for diffability and
//! replaced atomically at the end of a run.

use std::path::{Path, PathBuf};

use draftindex_core::{fs::write_string_atomic, TimestampIndex};
use thiserror::Error;

use crate::names;

/// Timestamp store error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// JSON (de)serialization failed.
    #[error("timestamp index serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic write failed.
    #[error(transparent)]
    Write(#[from] draftindex_core::Error),

    /// Failed to read a persisted index.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The index path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Serialize the full index to `<root>/timestamps.json`, overwriting any
/// prior version.
pub fn persist_timestamps(root: &Path, timestamps: &TimestampIndex) -> Result<(), StoreError> {
    let mut contents = serde_json::to_string_pretty(timestamps)?;
    contents.push('\n');
    write_string_atomic(root.join(names::TIMESTAMPS_FILE), &contents)?;
    Ok(())
}

/// Read a previously persisted index back.
pub fn load_timestamps(root: &Path) -> Result<TimestampIndex, StoreError> {
    let path = root.join(names::TIMESTAMPS_FILE);
    let contents = std::fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_every_entry() {
        let temp = TempDir::new().unwrap();
        let timestamps = TimestampIndex::from([
            ("motion".to_string(), 1_700_000_000),
            ("motion-1".to_string(), 1_600_000_000),
            ("motion-2".to_string(), 1_700_000_000),
        ]);

        persist_timestamps(temp.path(), &timestamps).unwrap();
        let loaded = load_timestamps(temp.path()).unwrap();

        assert_eq!(loaded, timestamps);
    }

    #[test]
    fn test_document_is_key_sorted_and_indented() {
        let temp = TempDir::new().unwrap();
        let timestamps = TimestampIndex::from([
            ("zulu".to_string(), 2),
            ("alpha".to_string(), 1),
        ]);

        persist_timestamps(temp.path(), &timestamps).unwrap();
        let contents =
            std::fs::read_to_string(temp.path().join(names::TIMESTAMPS_FILE)).unwrap();

        let alpha = contents.find("\"alpha\"").unwrap();
        let zulu = contents.find("\"zulu\"").unwrap();
        assert!(alpha < zulu, "keys must be sorted");
        assert!(contents.contains("  \"alpha\": 1"), "2-space indent");
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_persist_fully_overwrites_prior_state() {
        let temp = TempDir::new().unwrap();

        let first = TimestampIndex::from([("stale".to_string(), 1)]);
        persist_timestamps(temp.path(), &first).unwrap();

        let second = TimestampIndex::from([("fresh".to_string(), 2)]);
        persist_timestamps(temp.path(), &second).unwrap();

        let loaded = load_timestamps(temp.path()).unwrap();
        assert_eq!(loaded, second);
    }
}
