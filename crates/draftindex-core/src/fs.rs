//! File system utilities for draftindex.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Write to a file atomically (write to temp in the same directory, then rename).
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();

    // The temp file must live next to the target so the rename stays on one
    // filesystem.
    let mut temp_path = path.to_path_buf();
    if let Some(name) = path.file_name() {
        temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy()));
    } else {
        temp_path.push(".tmp");
    }

    {
        let mut file = File::create(&temp_path).map_err(|e| Error::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(contents).map_err(|e| Error::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| Error::Write {
            path: temp_path.clone(),
            source: e,
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(())
}

/// Write string contents to a file atomically.
pub fn write_string_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.json");

        write_string_atomic(&target, "{}\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.json");

        write_string_atomic(&target, "old").unwrap();
        write_string_atomic(&target, "new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.json");

        write_string_atomic(&target, "contents").unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.json")]);
    }
}
