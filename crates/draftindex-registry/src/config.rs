//! Registry run configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names;

/// Configuration for a registry run.
///
/// Loaded from `draftindex.toml` at the working root; every field has a
/// default, so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading and `<title>` of the generated index page.
    pub page_title: String,

    /// Shortname-to-level overrides for the current-work decision, used
    /// only when the status-driven default would pick the wrong level.
    pub current_work_overrides: BTreeMap<String, u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: "Editor Drafts".to_string(),
            current_work_overrides: BTreeMap::new(),
        }
    }
}

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("invalid config: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
}

impl Config {
    /// Load configuration from `<root>/draftindex.toml`.
    ///
    /// A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(names::CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}
