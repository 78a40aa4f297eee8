//! Per-directory metadata extraction.

use std::path::Path;

use draftindex_core::{SpecRecord, WorkStatus};
use draftindex_git::AuthoredTimestamps;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::html::title_from_html;
use crate::names;
use crate::source::{parse_source_metadata, SourceMetadata};

/// Tagged result of inspecting one directory.
///
/// Structured metadata comes from the spec's own source file and is
/// authoritative; heuristic metadata is reconstructed from a pre-rendered
/// document and the directory name.
#[derive(Debug, Clone)]
pub enum ExtractedMetadata {
    /// From a structured source artifact.
    Structured {
        /// The assembled source metadata.
        metadata: SourceMetadata,
        /// Last authorship time of the source file, when history exists.
        timestamp: Option<i64>,
    },
    /// Reconstructed from a pre-rendered document.
    Heuristic {
        /// Family identifier derived from the directory name.
        shortname: String,
        /// Level derived from the directory name; 0 when unlevelled.
        level: u32,
        /// Title scraped from the document, when present.
        title: Option<String>,
    },
}

impl ExtractedMetadata {
    /// Flatten into the uniform record shape used by grouping.
    pub fn into_record(self, dir: String) -> SpecRecord {
        match self {
            Self::Structured {
                metadata,
                timestamp,
            } => SpecRecord {
                dir,
                shortname: metadata.shortname,
                level: metadata.level,
                title: metadata.title,
                work_status: metadata.work_status,
                timestamp,
                current_work: false,
            },
            Self::Heuristic {
                shortname,
                level,
                title,
            } => SpecRecord {
                dir,
                shortname,
                level,
                title,
                // A rendered-only directory is assumed to be finished work.
                work_status: WorkStatus::Completed,
                timestamp: None,
                current_work: false,
            },
        }
    }
}

/// Inspect one directory for a spec artifact.
///
/// The structured source takes priority over a pre-rendered document;
/// `Ok(None)` means the directory holds neither and is not a spec.
pub fn extract(
    dir_path: &Path,
    dir_name: &str,
    history: &dyn AuthoredTimestamps,
) -> Result<Option<ExtractedMetadata>, ExtractError> {
    let source_file = dir_path.join(names::SOURCE_FILE);
    if source_file.exists() {
        let metadata = parse_source_metadata(&source_file)?;
        let timestamp = history.last_authored(&source_file)?;
        if timestamp.is_none() {
            warn!(
                dir = dir_name,
                "no version history for source file; omitting timestamp"
            );
        }
        return Ok(Some(ExtractedMetadata::Structured {
            metadata,
            timestamp,
        }));
    }

    let rendered_file = dir_path.join(names::RENDERED_FILE);
    if rendered_file.exists() {
        let (shortname, level) = shortname_from_dir(dir_name);
        let title = title_from_html(&rendered_file)?;
        return Ok(Some(ExtractedMetadata::Heuristic {
            shortname,
            level,
            title,
        }));
    }

    debug!(dir = dir_name, "not a spec directory");
    Ok(None)
}

/// Split `<identifier>-<level>` directory names; anything else is an
/// unlevelled shortname.
fn shortname_from_dir(dir_name: &str) -> (String, u32) {
    let Ok(pattern) = Regex::new(r"^([a-z0-9-]+)-([0-9]+)$") else {
        return (dir_name.to_string(), 0);
    };
    match pattern.captures(dir_name) {
        Some(caps) => match caps[2].parse() {
            Ok(level) => (caps[1].to_string(), level),
            Err(_) => (dir_name.to_string(), 0),
        },
        None => (dir_name.to_string(), 0),
    }
}
