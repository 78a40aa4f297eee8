//! Error types for draftindex core operations.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to write a file, with the target path.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the core error.
pub type Result<T> = std::result::Result<T, Error>;
