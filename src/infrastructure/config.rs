//! Configuration infrastructure
//!
//! Contains configuration loading and management for the actor roster.
//! The configuration lives in a JSON file under the user's config directory
//! and is created with defaults on first use.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use tokio::fs;
use tracing::warn;

const APP_DIR_NAME: &str = "actor-roster";
const CONFIG_FILE_NAME: &str = "actor_roster_config.json";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit sqlx URL; falls back to the app data directory when unset
    pub url: Option<String>,

    /// Maximum pooled connections
    pub max_connections: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; defaults to `<data dir>/logs`
    pub log_dir: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: None,
        }
    }
}

impl DatabaseConfig {
    /// Resolve the sqlx URL for the actor database
    pub fn database_url(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let db_path = ConfigManager::get_app_data_dir()?
            .join("database")
            .join("actors.db");
        Ok(format!("sqlite:{}", db_path.display()))
    }
}

impl LoggingConfig {
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(ConfigManager::get_app_data_dir()?.join("logs")),
        }
    }
}

/// A corrupted configuration file that was replaced with defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecovery {
    pub config_path: PathBuf,
    pub parse_error: String,
    /// Copy of the unparsable file, when the backup succeeded
    pub backup_path: Option<PathBuf>,
}

impl ConfigRecovery {
    /// Report the recovery once a subscriber is installed
    pub fn log(&self) {
        warn!(
            "Configuration file {:?} is invalid ({}); using defaults",
            self.config_path, self.parse_error
        );
        match &self.backup_path {
            Some(backup) => warn!("Corrupted configuration backed up to {:?}", backup),
            None => warn!("Corrupted configuration could not be backed up"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub recovery: Option<ConfigRecovery>,
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Get application data directory
    pub fn get_app_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Failed to get user data directory")?
            .join(APP_DIR_NAME);

        Ok(data_dir)
    }

    /// Configuration manager for the default per-user location
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join(CONFIG_FILE_NAME);
        Ok(Self { config_path })
    }

    /// Configuration manager for an explicit file
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self { config_path: config_path.into() }
    }

    /// Load configuration from file, creating default if it doesn't exist.
    ///
    /// An unparsable file is backed up and replaced with defaults. The
    /// replacement is reported in the returned [`LoadedConfig`] because this
    /// usually runs before logging is initialized.
    pub async fn load_config(&self) -> Result<LoadedConfig> {
        if !self.config_path.exists() {
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            return Ok(LoadedConfig { config: default_config, recovery: None });
        }

        let content = fs::read_to_string(&self.config_path).await
            .context("Failed to read configuration file")?;

        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(LoadedConfig { config, recovery: None }),
            Err(parse_error) => {
                let backup_path = self.config_path.with_extension("json.corrupted");
                let backup_path = match fs::copy(&self.config_path, &backup_path).await {
                    Ok(_) => Some(backup_path),
                    Err(_) => None,
                };

                let default_config = AppConfig::default();
                self.save_config(&default_config).await
                    .context("Failed to save default configuration")?;

                Ok(LoadedConfig {
                    config: default_config,
                    recovery: Some(ConfigRecovery {
                        config_path: self.config_path.clone(),
                        parse_error: parse_error.to_string(),
                        backup_path,
                    }),
                })
            }
        }
    }

    /// Save configuration to file
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).await
                .context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content).await
            .context("Failed to write configuration file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
