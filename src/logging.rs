//! File-based tracing setup.
//!
//! The TUI takes over stdout/stderr, so log lines go to a file target.
//! When no file is configured, logging stays uninitialized and all tracing
//! macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with the given default filter, writing to `file`.
///
/// `RUST_LOG` overrides the configured filter when set.
pub fn init(default_filter: &str, file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
