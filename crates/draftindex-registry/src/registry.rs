//! Registry construction: scan, group, and the current-work decision.

use std::collections::BTreeMap;
use std::path::Path;

use draftindex_core::{SpecGroups, SpecRecord, TimestampIndex};
use draftindex_git::AuthoredTimestamps;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::BuildError;
use crate::extract::extract;

/// The transient result of a registry build.
///
/// Owned and returned by [`build_registry`]; only the timestamp index and
/// the filesystem aliases outlive the run.
#[derive(Debug, Default)]
pub struct Registry {
    /// Spec families keyed by shortname, members ordered ascending by level.
    pub groups: SpecGroups,
    /// Directory-name (and, after reconciliation, alias) keys to Unix
    /// timestamps.
    pub timestamps: TimestampIndex,
}

impl Registry {
    /// Total number of spec records across all families.
    pub fn spec_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Scan the working root and build the grouped registry.
///
/// Only real immediate subdirectories are considered; symlinked directories
/// are this tool's own outputs, not inputs. Non-spec directories are
/// skipped, while a directory whose metadata cannot be extracted aborts the
/// build.
pub fn build_registry(
    root: &Path,
    config: &Config,
    history: &dyn AuthoredTimestamps,
) -> Result<Registry, BuildError> {
    let mut groups: SpecGroups = BTreeMap::new();
    let mut timestamps = TimestampIndex::new();

    let entries = std::fs::read_dir(root).map_err(|e| BuildError::Scan {
        path: root.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| BuildError::Scan {
            path: root.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| BuildError::Scan {
            path: root.to_path_buf(),
            source: e,
        })?;
        if file_type.is_symlink() || !file_type.is_dir() {
            continue;
        }
        let Ok(dir_name) = entry.file_name().into_string() else {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 directory name");
            continue;
        };

        let extracted = extract(&entry.path(), &dir_name, history)
            .map_err(|source| BuildError::Extract {
                dir: dir_name.clone(),
                source,
            })?;
        let Some(extracted) = extracted else { continue };

        let record = extracted.into_record(dir_name);
        if let Some(timestamp) = record.timestamp {
            timestamps.insert(record.dir.clone(), timestamp);
        }
        debug!(
            dir = %record.dir,
            shortname = %record.shortname,
            level = record.level,
            "registered spec"
        );
        groups.entry(record.shortname.clone()).or_default().push(record);
    }

    for (shortname, members) in &mut groups {
        finalize_group(shortname, members, &config.current_work_overrides);
    }

    info!(
        specs = groups.values().map(Vec::len).sum::<usize>(),
        families = groups.len(),
        "registry built"
    );
    Ok(Registry { groups, timestamps })
}

/// Order a family by level and mark exactly one member as current work.
///
/// Decision order for multi-member families: an override naming a level
/// present in the family wins; otherwise the lowest non-completed level;
/// otherwise the highest level.
fn finalize_group(
    shortname: &str,
    members: &mut Vec<SpecRecord>,
    overrides: &BTreeMap<String, u32>,
) {
    if members.len() == 1 {
        members[0].current_work = true;
        return;
    }

    members.sort_by_key(|record| record.level);

    if let Some(&target) = overrides.get(shortname) {
        if let Some(member) = members.iter_mut().find(|record| record.level == target) {
            member.current_work = true;
            return;
        }
        warn!(
            shortname,
            level = target,
            "current-work override names a level not present in the family; \
             falling back to work status"
        );
    }

    if let Some(member) = members
        .iter_mut()
        .find(|record| !record.work_status.is_completed())
    {
        member.current_work = true;
        return;
    }

    // Every level reports completed work: the highest one is the live spec.
    if let Some(last) = members.last_mut() {
        last.current_work = true;
    }
}
