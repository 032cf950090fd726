//! Core error types for habithero-core.
//!
//! The calculation engines never fail; errors come from persistence,
//! configuration, entry-point validation and from transitions that need
//! an active habit or goal.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habithero-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State document errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A check-in was attempted before a habit was configured
    #[error("No active habit: complete onboarding or set a habit first")]
    NoActiveHabit,

    /// A goal operation was attempted while no goal is set
    #[error("No active goal: pick a new goal first")]
    NoActiveGoal,

    /// The active goal was archived before savings reached its target
    #[error("Goal not reached: saved {saved} of {target}")]
    GoalNotReached { saved: f64, target: f64 },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading or writing the state document.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to determine or create the data directory
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the state document
    #[error("Failed to read state from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the state document
    #[error("Failed to write state to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state document is not valid JSON or does not match the schema
    #[error("Malformed state document at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors for values entered by the user.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A field required by another field's value is missing
    #[error("Missing '{field}': {reason}")]
    Missing { field: String, reason: String },

    /// Time of day not in HH:MM form
    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTime(String),
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::Missing {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
