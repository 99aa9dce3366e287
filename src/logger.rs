//! Logging setup
//!
//! The crate itself only emits records through the `log` facade. This module
//! builds a fern dispatcher from [`LoggingConfig`] for applications that want
//! those records written somewhere.

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

/// Parse a level name such as "debug" (case-insensitive)
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level '{}'", level))
}

/// Build the dispatcher described by `config` without installing it
///
/// A disabled config yields a dispatcher at `LevelFilter::Off`.
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = if config.enabled {
        parse_level(&config.level)?
    } else {
        LevelFilter::Off
    };

    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => base.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => base.chain(std::io::stderr()),
    };

    Ok(dispatch)
}

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a global logger is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    dispatch(config)?.apply().context("Failed to install logger")?;
    Ok(())
}
