//! Error types for registry construction.

use std::path::PathBuf;

use thiserror::Error;

/// Metadata extraction error for a single spec directory.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file carries no metadata block.
    #[error("no metadata block in {path}")]
    MissingMetadataBlock {
        /// The source file.
        path: PathBuf,
    },

    /// A required metadata key is missing from the source block.
    #[error("missing required {key:?} in {path}")]
    MissingKey {
        /// The metadata key.
        key: &'static str,
        /// The source file.
        path: PathBuf,
    },

    /// A level value that is not a non-negative integer.
    #[error("invalid level {value:?} in {path}")]
    InvalidLevel {
        /// The raw value.
        value: String,
        /// The source file.
        path: PathBuf,
    },

    /// Failed to read an artifact.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The artifact path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Version-history query failed.
    #[error(transparent)]
    History(#[from] draftindex_git::HistoryError),
}

/// Registry build error.
///
/// Extraction failures abort the whole run so that a partial index with
/// silently missing specs is never published.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Extraction failed for one spec directory.
    #[error("failed to extract metadata from {dir:?}: {source}")]
    Extract {
        /// The directory being extracted.
        dir: String,
        /// The extraction failure.
        #[source]
        source: ExtractError,
    },

    /// Failed to scan the working root.
    #[error("failed to scan {path}: {source}")]
    Scan {
        /// The working root.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
