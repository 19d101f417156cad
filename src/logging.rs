//! Tracing setup for the terminal binary.
//!
//! The terminal is the game screen, so log lines never go to stdout. They go
//! to `BLOCKFALL_LOG_PATH` when set and nowhere otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Parse the configured filter directive.
pub fn env_filter(config: &Config) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))
}

/// Install the global subscriber. Returns false when logging is off.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let filter = env_filter(config)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(true)
}
