//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// draftindex - specification registry builder
///
/// Scans sibling spec directories and produces an index page, a timestamp
/// document, and level-independent symlinks for each spec family.
#[derive(Debug, Parser)]
#[command(name = "draftindex", author, version, about, long_about = None)]
pub struct Cli {
    /// Working root containing the spec directories
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file (defaults to <root>/draftindex.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}
