//! Spec registry construction for draftindex.
//!
//! Discovers spec directories, extracts per-spec metadata from the two
//! source-artifact kinds, groups multi-level specs under one canonical
//! shortname, decides the current-work member of each family, and
//! reconciles that decision into filesystem aliases, a persisted timestamp
//! index, and a static HTML listing page.

pub mod alias;
pub mod config;
pub mod error;
pub mod extract;
pub mod html;
pub mod registry;
pub mod render;
pub mod source;
pub mod store;

pub use alias::{create_alias, reconcile_aliases, AliasOutcome};
pub use config::{Config, ConfigError};
pub use error::{BuildError, ExtractError};
pub use extract::{extract, ExtractedMetadata};
pub use registry::{build_registry, Registry};
pub use render::{render_index, write_index};
pub use source::SourceMetadata;
pub use store::{load_timestamps, persist_timestamps, StoreError};

/// Fixed artifact and output filenames.
pub mod names {
    /// Structured spec source within a spec directory.
    pub const SOURCE_FILE: &str = "Overview.bs";
    /// Pre-rendered spec document within a spec directory.
    pub const RENDERED_FILE: &str = "Overview.html";
    /// Persisted timestamp index at the working root.
    pub const TIMESTAMPS_FILE: &str = "timestamps.json";
    /// Generated listing page at the working root.
    pub const INDEX_FILE: &str = "index.html";
    /// Optional configuration file at the working root.
    pub const CONFIG_FILE: &str = "draftindex.toml";
}
