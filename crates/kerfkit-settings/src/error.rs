//! Error types for the settings crate.

use kerfkit_core::KerfError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or validating job files.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The job file could not be read.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The job file could not be written.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A setting is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The pattern parameters are invalid.
    #[error(transparent)]
    Kerf(#[from] KerfError),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
