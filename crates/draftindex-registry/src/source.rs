//! Structured spec-source metadata.
//!
//! A structured source carries its metadata in a `<pre class=metadata>`
//! block of `Key: Value` lines; indented lines continue the previous value
//! and `</pre>` terminates the block.

use std::path::Path;

use draftindex_core::WorkStatus;

use crate::error::ExtractError;

/// Metadata assembled from a structured spec source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    /// Canonical family identifier; required in the source.
    pub shortname: String,
    /// Revision number; absent or `none` in the source means unlevelled.
    pub level: u32,
    /// Display title.
    pub title: Option<String>,
    /// Reported maturation state.
    pub work_status: WorkStatus,
}

/// Parse the metadata block of a structured source file.
pub fn parse_source_metadata(path: &Path) -> Result<SourceMetadata, ExtractError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ExtractError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_metadata_block(&contents, path)
}

fn parse_metadata_block(contents: &str, path: &Path) -> Result<SourceMetadata, ExtractError> {
    let mut in_block = false;
    let mut entries: Vec<(String, String)> = Vec::new();

    for line in contents.lines() {
        if !in_block {
            if is_metadata_open(line.trim()) {
                in_block = true;
            }
            continue;
        }
        if line.trim().eq_ignore_ascii_case("</pre>") {
            break;
        }
        // Indented lines continue the previous value.
        if line.starts_with(char::is_whitespace) && !line.trim().is_empty() {
            if let Some(last) = entries.last_mut() {
                last.1.push('\n');
                last.1.push_str(line.trim());
            }
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            entries.push((key.trim().to_lowercase(), value.trim().to_string()));
        }
    }

    if !in_block {
        return Err(ExtractError::MissingMetadataBlock {
            path: path.to_path_buf(),
        });
    }

    let mut shortname: Option<String> = None;
    let mut level: Option<String> = None;
    let mut title: Option<String> = None;
    let mut work_status: Option<String> = None;

    for (key, value) in entries {
        let slot = match key.as_str() {
            "shortname" => &mut shortname,
            "level" => &mut level,
            "title" => &mut title,
            "work status" => &mut work_status,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let shortname = match shortname {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ExtractError::MissingKey {
                key: "Shortname",
                path: path.to_path_buf(),
            })
        }
    };

    let level = match level.as_deref() {
        None | Some("") | Some("none") => 0,
        Some(raw) => raw.parse().map_err(|_| ExtractError::InvalidLevel {
            value: raw.to_string(),
            path: path.to_path_buf(),
        })?,
    };

    let work_status = work_status
        .map(|s| WorkStatus::from_string(&s))
        .unwrap_or(WorkStatus::Undefined);

    Ok(SourceMetadata {
        shortname,
        level,
        title,
        work_status,
    })
}

/// Matches the opening tag of the metadata block, with or without quotes
/// around the class value.
fn is_metadata_open(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("<pre")
        && (lower.contains("class=metadata")
            || lower.contains("class=\"metadata\"")
            || lower.contains("class='metadata'"))
}
