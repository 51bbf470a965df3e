//! # Application Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority, applied in lib::run)         │
//! │     --log-level debug   --no-log-file                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOCKROOM_LOG=debug          (RUST_LOG when this is unset)         │
//! │     STOCKROOM_LOG_FILE=/tmp/stockroom.log                              │
//! │     STOCKROOM_LOG_MAX_FILES=7                                          │
//! │     STOCKROOM_LOW_STOCK_THRESHOLD=5                                    │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, otherwise                                         │
//! │     ~/.config/stockroom/stockroom.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     level "info,stockroom=debug", log file in the data dir,            │
//! │     3 log files kept, threshold 10                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [logging]
//! level = "info,stockroom=debug"
//! file = "/var/log/stockroom.log"
//! enabled = true
//! max_files = 3
//!
//! [inventory]
//! low_stock_threshold = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use stockroom_core::LOW_STOCK_THRESHOLD;

use crate::error::{AppError, AppResult};

pub const ENV_LOG: &str = "STOCKROOM_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";
pub const ENV_LOG_FILE: &str = "STOCKROOM_LOG_FILE";
pub const ENV_LOG_MAX_FILES: &str = "STOCKROOM_LOG_MAX_FILES";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

const CONFIG_FILE_NAME: &str = "stockroom.toml";
const LOG_FILE_NAME: &str = "stockroom.log";

/// Level used when nothing is configured. Keeps the inventory's debug events
/// (ID collisions) while the dependencies stay at `info`.
pub const DEFAULT_LOG_LEVEL: &str = "info,stockroom=debug";

/// Daily log files kept on disk, today's included.
pub const DEFAULT_LOG_MAX_FILES: usize = 3;

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,stockroom=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file path. `None` falls back to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Set to false to discard log output entirely.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// How many daily files to keep; older ones are deleted at startup and
    /// on rollover.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_max_files() -> usize {
    DEFAULT_LOG_MAX_FILES
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            file: None,
            enabled: true,
            max_files: default_max_files(),
        }
    }
}

impl LoggingConfig {
    /// The configured file, or `stockroom.log` in the data directory.
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            directories::ProjectDirs::from("com", "stockroom", "stockroom")
                .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
        })
    }
}

// =============================================================================
// Inventory Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Products with stock strictly below this are reported as low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,
}

fn default_low_stock_threshold() -> u64 {
    LOW_STOCK_THRESHOLD
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`explicit_path`, else the platform default)
    /// 3. Environment variables
    ///
    /// A missing platform default file is fine; a missing `explicit_path`
    /// is an error.
    pub fn load(explicit_path: Option<&Path>) -> AppResult<Self> {
        let mut config = match explicit_path {
            Some(path) if !path.exists() => {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file without applying overrides.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from `lookup`, normally the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG).or_else(|| lookup(ENV_RUST_LOG)) {
            debug!(%level, "Overriding log level from environment");
            self.logging.level = level;
        }

        if let Some(file) = lookup(ENV_LOG_FILE) {
            debug!(%file, "Overriding log file from environment");
            self.logging.file = Some(PathBuf::from(file));
        }

        if let Some(max_files) = lookup(ENV_LOG_MAX_FILES) {
            match max_files.trim().parse::<usize>() {
                Ok(value) => self.logging.max_files = value,
                Err(_) => warn!(%max_files, "Ignoring non-numeric log file count"),
            }
        }

        if let Some(threshold) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            match threshold.trim().parse::<u64>() {
                Ok(value) => self.inventory.low_stock_threshold = value,
                Err(_) => warn!(%threshold, "Ignoring non-numeric low stock threshold"),
            }
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(AppError::InvalidConfig("log level cannot be empty".into()));
        }
        if self.logging.max_files == 0 {
            return Err(AppError::InvalidConfig(
                "logging.max_files must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `stockroom.toml` in the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
