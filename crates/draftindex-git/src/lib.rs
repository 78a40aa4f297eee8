//! Git integration for draftindex.
//!
//! Provides the version-timestamp collaborator: the Unix author time of the
//! most recent commit touching a path.

pub mod error;
pub mod history;

pub use error::{HistoryError, HistoryResult};
pub use history::{AuthoredTimestamps, GitHistory};

// Re-export git2 for test fixtures and advanced usage
pub use git2;
