//! Error types for settings operations
//!
//! State handlers have no recoverable failures; everything fallible in the
//! crate goes through `SettingsError`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary file could not be moved over the settings file
    #[error("Could not replace settings file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Settings path has no parent directory to write into
    #[error("Invalid settings path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
