//! Record types shared across the draftindex crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maturation state reported by a spec's own structured metadata.
///
/// Only [`WorkStatus::Completed`] counts as finished work; every other
/// value, including [`WorkStatus::Undefined`], marks the level as still
/// being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// Work on this level has finished.
    Completed,
    /// Feature-stable but still receiving fixes.
    Stable,
    /// Stable content, tests being written.
    Testing,
    /// Broadly right, details being refined.
    Refining,
    /// A finished level being revised in place.
    Revising,
    /// Early exploration.
    Exploring,
    /// Being rewritten from scratch.
    Rewriting,
    /// No longer pursued.
    Abandoned,
    /// Absent or unrecognized in the source metadata.
    Undefined,
}

impl WorkStatus {
    /// Parse the status string reported by a source artifact.
    pub fn from_string(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "completed" => Self::Completed,
            "stable" => Self::Stable,
            "testing" => Self::Testing,
            "refining" => Self::Refining,
            "revising" => Self::Revising,
            "exploring" => Self::Exploring,
            "rewriting" => Self::Rewriting,
            "abandoned" => Self::Abandoned,
            _ => Self::Undefined,
        }
    }

    /// Whether the status marks finished work.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// One discovered spec directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecRecord {
    /// Directory name; identity of the physical artifact.
    pub dir: String,
    /// Canonical, level-independent family identifier.
    pub shortname: String,
    /// Revision number; 0 means unlevelled.
    pub level: u32,
    /// Display title, when one could be derived.
    pub title: Option<String>,
    /// Maturation state reported by the source artifact.
    pub work_status: WorkStatus,
    /// Unix seconds of the last authorship event, when derivable.
    pub timestamp: Option<i64>,
    /// Whether this member is the family's actively maintained level.
    pub current_work: bool,
}

impl SpecRecord {
    /// Display title, falling back to the directory name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.dir)
    }
}

/// Spec families keyed by shortname, members ordered ascending by level.
pub type SpecGroups = BTreeMap<String, Vec<SpecRecord>>;

/// Shortname (including alias shortnames) to Unix timestamp.
pub type TimestampIndex = BTreeMap<String, i64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_status_parsing() {
        assert_eq!(WorkStatus::from_string("completed"), WorkStatus::Completed);
        assert_eq!(WorkStatus::from_string("Completed"), WorkStatus::Completed);
        assert_eq!(WorkStatus::from_string("exploring"), WorkStatus::Exploring);
        assert_eq!(WorkStatus::from_string("ED"), WorkStatus::Undefined);
        assert_eq!(WorkStatus::from_string(""), WorkStatus::Undefined);
    }

    #[test]
    fn test_only_completed_is_completed() {
        assert!(WorkStatus::Completed.is_completed());
        assert!(!WorkStatus::Stable.is_completed());
        assert!(!WorkStatus::Undefined.is_completed());
        assert!(!WorkStatus::Abandoned.is_completed());
    }

    #[test]
    fn test_work_status_serializes_lowercase() {
        let json = serde_json::to_string(&WorkStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: WorkStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WorkStatus::Completed);
    }

    #[test]
    fn test_display_title_fallback() {
        let mut record = SpecRecord {
            dir: "paint-worklet".to_string(),
            shortname: "paint-worklet".to_string(),
            level: 0,
            title: None,
            work_status: WorkStatus::Completed,
            timestamp: None,
            current_work: false,
        };
        assert_eq!(record.display_title(), "paint-worklet");

        record.title = Some("CSS Paint API Level 1".to_string());
        assert_eq!(record.display_title(), "CSS Paint API Level 1");
    }
}
