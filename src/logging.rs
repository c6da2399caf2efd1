//! Logging setup
//!
//! The terminal belongs to the UI, so log records go to a file under the
//! config directory. Logging is off unless `RUST_LOG` is set.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const LOG_FILE: &str = "metrology-ai.log";

/// Path of the log file, if a home directory is known
pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join(LOG_FILE))
}

/// Initialise `env_logger` writing to the log file
///
/// Returns the path logged to, or `None` when `RUST_LOG` is unset.
pub fn init() -> Result<Option<PathBuf>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = log_path().context("Could not determine log directory")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(Some(path))
}
