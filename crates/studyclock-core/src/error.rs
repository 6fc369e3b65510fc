//! Core error types for studyclock-core.
//!
//! The clock and blinker state machines never fail; errors only show up at
//! the edges, where a host loads configuration or validates user input
//! before handing it to the clock.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Could not resolve the data directory
    #[error("Cannot resolve data directory: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Value outside an inclusive range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        let ValidationError::OutOfRange { ref field, .. } = err;
        ConfigError::InvalidValue {
            key: field.clone(),
            message: err.to_string(),
        }
    }
}
