//! Configuration management for datetime-helpers
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Applications embedding the crate can use it to pick their default string
//! patterns and logging setup instead of hard-coding them.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT,
    DEFAULT_LOG_LEVEL,
};
use crate::error::DateError;
use crate::logger;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatsConfig,
    pub logging: LoggingConfig,
}

/// Default string patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    /// strftime pattern for dates
    pub date_format: String,
    /// strftime pattern for date-times
    pub datetime_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl FormatsConfig {
    pub fn format_date(&self, d: NaiveDate) -> Result<String, DateError> {
        datetime::format_date(d, &self.date_format)
    }

    pub fn format_date_time(&self, dt: NaiveDateTime) -> Result<String, DateError> {
        datetime::format_date_time(dt, &self.datetime_format)
    }

    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, DateError> {
        datetime::parse_date(text, &self.date_format)
    }

    pub fn parse_date_time(&self, text: &str) -> Result<NaiveDateTime, DateError> {
        datetime::parse_date_time(text, &self.datetime_format)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // A pattern must render a sample value and read it back.
        let sample = datetime::new_date_time(2025, 1, 31, 13, 45, 30, 123_456)?;

        let rendered = self
            .formats
            .format_date(sample.date())
            .with_context(|| format!("Invalid date_format '{}'", self.formats.date_format))?;
        self.formats
            .parse_date(&rendered)
            .with_context(|| format!("date_format '{}' cannot be parsed back", self.formats.date_format))?;

        let rendered = self
            .formats
            .format_date_time(sample)
            .with_context(|| format!("Invalid datetime_format '{}'", self.formats.datetime_format))?;
        self.formats.parse_date_time(&rendered).with_context(|| {
            format!(
                "datetime_format '{}' cannot be parsed back",
                self.formats.datetime_format
            )
        })?;

        logger::parse_level(&self.logging.level)?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# datetime-helpers Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(DEFAULT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
