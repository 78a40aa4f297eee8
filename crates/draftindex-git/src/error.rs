//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

/// Version-history query error.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Not inside a git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// Path the discovery started from.
        path: PathBuf,
    },

    /// Repository has no working tree to resolve paths against.
    #[error("repository at {path} is bare")]
    BareRepo {
        /// Path the discovery started from.
        path: PathBuf,
    },

    /// Path lies outside the repository working tree.
    #[error("{path} is outside the repository working tree")]
    OutsideWorkTree {
        /// The resolved path.
        path: PathBuf,
    },

    /// Underlying git2 failure.
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// I/O error resolving a path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for history queries.
pub type HistoryResult<T> = Result<T, HistoryError>;
