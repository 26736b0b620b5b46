//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.local/state/tabspace/tabspace.log`. `RUST_LOG` wins over the
//! configured filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global subscriber. Returns the log file path when logging is
/// active; failures leave the app running without logs.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .try_init()
        .ok()?;
    Some(path)
}

fn log_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("tabspace")
            .join("tabspace.log"),
    )
}
