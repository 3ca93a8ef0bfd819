use std::io;

use thiserror::Error;

use super::conversion::ConversionError;

/// Library-wide error type for fawkes operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Path conversion failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Target kind name is not one of the recognized kinds.
    #[error(
        "Invalid target '{0}': must be one of test, controller, model, view, html, live, component, liveComponent, channel, json, task, feature"
    )]
    InvalidTarget(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse config {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Editor could not be launched.
    #[error("Failed to launch editor '{command}': {details}")]
    Editor { command: String, details: String },

    /// Interactive prompt failed.
    #[error("{0}")]
    Prompt(String),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn prompt<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    /// Whether this error is the core `InvalidPath` failure.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, AppError::Conversion(ConversionError::InvalidPath(_)))
    }
}
