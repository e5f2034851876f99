//! `tracing` subscriber setup.
//!
//! The TUI owns the terminal, so logs only go to a file there.  `--raw` mode
//! prints to stdout and can log to stderr instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to this file.
    File(&'a Path),
    /// Write to stderr.
    Stderr,
    /// Install nothing.
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: an explicit file always wins, otherwise stderr unless the
    /// terminal is taken by the TUI.
    pub fn choose(log_file: Option<&'a Path>, tui: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if tui => LogTarget::Off,
            None => LogTarget::Stderr,
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.  `RUST_LOG` controls verbosity.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter());

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {e}"))
        }
    }
}
