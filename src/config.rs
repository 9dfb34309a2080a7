//! Configuration management for taskpile
//!
//! This module handles loading, parsing, and validation of configuration files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DATA_FILE_NAME, LOG_FILE_NAME, SIDEBAR_DEFAULT_PERCENT, SIDEBAR_MAX_PERCENT,
    SIDEBAR_MIN_PERCENT,
};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Category sidebar width as a percentage of the terminal width
    pub sidebar_percent: u16,
    /// Seed the welcome tree into an empty store on startup
    pub seed_welcome: bool,
}

/// External editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor program; takes precedence over $VISUAL and $EDITOR
    pub command: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Level filter: off, error, warn, info, debug or trace
    pub level: String,
    /// Log file path; defaults under the platform data directory
    pub file: Option<PathBuf>,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend to keep items in
    pub backend: StorageBackend,
    /// Snapshot path for the `file` backend; defaults under the
    /// platform data directory
    pub data_file: Option<PathBuf>,
}

/// Available storage backends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Volatile in-memory store
    #[default]
    Memory,
    /// Memory store mirrored to a JSON snapshot file
    File,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_percent: SIDEBAR_DEFAULT_PERCENT,
            seed_welcome: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("taskpile.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("taskpile").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_percent < SIDEBAR_MIN_PERCENT
            || self.ui.sidebar_percent > SIDEBAR_MAX_PERCENT
        {
            anyhow::bail!(
                "sidebar_percent must be between {} and {}, got {}",
                SIDEBAR_MIN_PERCENT,
                SIDEBAR_MAX_PERCENT,
                self.ui.sidebar_percent
            );
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!(
                "Invalid logging.level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Level filter parsed from the logging section
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Log file path: the configured one, or the default under the
    /// platform data directory
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.logging.file {
            return Ok(file.clone());
        }
        Ok(Self::data_dir()?.join(LOG_FILE_NAME))
    }

    /// Snapshot path for the file backend: the configured one, or the
    /// default under the platform data directory
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.storage.data_file {
            return Ok(file.clone());
        }
        Ok(Self::data_dir()?.join(DATA_FILE_NAME))
    }

    fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("taskpile"))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# taskpile configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("taskpile").join("config.toml"))
    }
}
