//! tracing subscriber setup for the binaries.
//!
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Append logs to `path`. Used while the terminal is in raw mode, where
/// stderr output would tear the frame.
pub fn init_file(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))
}
