//! CLI error type and exit-code mapping.

use thiserror::Error;

use crate::Exit;

/// Top-level CLI failure.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] draftindex_registry::ConfigError),

    /// The working root is not inside a usable repository.
    #[error(transparent)]
    History(#[from] draftindex_git::HistoryError),

    /// Registry construction failed.
    #[error(transparent)]
    Build(#[from] draftindex_registry::BuildError),

    /// Persisting the timestamp index failed.
    #[error(transparent)]
    Store(#[from] draftindex_registry::StoreError),

    /// Writing an output file failed.
    #[error(transparent)]
    Io(#[from] draftindex_core::Error),
}

impl CliError {
    /// Map the failure to a process exit code.
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config(_) => Exit::ConfigError,
            Self::Store(_) | Self::Io(_) => Exit::IoError,
            Self::History(_) | Self::Build(_) => Exit::GeneralError,
        }
    }
}
