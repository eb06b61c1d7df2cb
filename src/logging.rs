//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so log output goes to a file when one is
//! given. Headless runs may log to stderr instead. With neither, no
//! subscriber is installed and events are dropped.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log events are written
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(io::Error::other)
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(io::Error::other),
        LogTarget::Discard => Ok(()),
    }
}
