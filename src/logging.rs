// 📜 Logging setup
// tracing subscriber, filtered by RUST_LOG.

use anyhow::{Context as AnyhowContext, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Compact logs on stderr, keeping stdout free for command output.
pub fn init_stderr(default_filter: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

/// Append logs to `path`. Used while the TUI owns the terminal.
pub fn init_file(path: &Path, default_filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let _ = fmt()
        .with_env_filter(env_filter(default_filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
