//! Error types for readycheck operations.
//!
//! This module defines [`ReadycheckError`], the error type used for
//! everything outside a probe (configuration loading, output), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never surface here: they are captured as
//!   [`ProbeError`](crate::probe::ProbeError) and folded into the report
//! - Use `ReadycheckError` for failures that stop the tool from starting

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readycheck operations.
#[derive(Debug, Error)]
pub enum ReadycheckError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReadycheckError {
    /// Whether this error originates from the tool's own configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for readycheck operations.
pub type Result<T> = std::result::Result<T, ReadycheckError>;
