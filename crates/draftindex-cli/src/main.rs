//! draftindex - specification registry builder.
//!
//! Main entry point for the `draftindex` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

mod cli;
mod error;

use cli::Cli;
use draftindex_git::GitHistory;
use draftindex_registry::{
    build_registry, persist_timestamps, reconcile_aliases, render_index, write_index, Config,
};
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!("{e}");
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(&cli.root)?,
    };

    let history = GitHistory::discover(&cli.root)?;
    let mut registry = build_registry(&cli.root, &config, &history)?;

    reconcile_aliases(&cli.root, &mut registry);
    persist_timestamps(&cli.root, &registry.timestamps)?;

    let html = render_index(&registry, &config);
    write_index(&cli.root, &html)?;

    info!(
        specs = registry.spec_count(),
        families = registry.groups.len(),
        "index built"
    );
    Ok(())
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(cli.verbose >= 2))
        .init();
}
