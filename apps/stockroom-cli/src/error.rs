//! # Application Error Type
//!
//! Everything that can stop the menu from running.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  bad user input ── ValidationError ──► printed, prompt repeats          │
//! │                                                                         │
//! │  core failure ──── CoreError ─────────► AppError::Core                  │
//! │                                          printed, menu continues        │
//! │                                                                         │
//! │  config / terminal ── io, toml ───────► AppError                        │
//! │                                          startup or session ends        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use stockroom_core::CoreError;
use thiserror::Error;

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configuration is syntactically fine but unusable.
    ///
    /// ## When This Occurs
    /// - Empty log level
    /// - A log filter `tracing-subscriber` cannot parse
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `--config` pointed at a file that does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    // =========================================================================
    // Terminal Errors
    // =========================================================================
    /// Reading stdin, writing stdout or touching the file system failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Inventory Errors
    // =========================================================================
    /// The inventory refused an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// True for errors the menu reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }
}
