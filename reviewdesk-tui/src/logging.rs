//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so diagnostics go to the configured log
//! file. `RUST_LOG` takes precedence over the configured filter.

use crate::config::LoggingConfig;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },
    #[error("Failed to init subscriber: {0}")]
    Init(String),
}

/// Resolve the active filter: `RUST_LOG` if set and valid, else the configured one.
pub fn resolve_filter(configured: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).map_err(|e| LoggingError::Filter {
        filter: configured.to_string(),
        reason: e.to_string(),
    })
}

/// Open (or create) the log file in append mode, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = resolve_filter(&config.filter)?;
    let file = open_log_file(&config.path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish()
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %config.path.display(), "Logging initialized");
    Ok(())
}
