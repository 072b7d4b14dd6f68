//! Error handling for an import run.
//!
//! Every failure aborts the run: nothing below the binary catches or retries
//! an `ImportError`, so the variant set mirrors where a run can break.

use thiserror::Error;

/// Unified error type for the import pipeline
#[derive(Debug, Error)]
pub enum ImportError {
    /// Transport failure or non-2xx response from the events API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON from the API, or failure to serialize the output
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An event lacks data needed to build a meetup
    #[error("Event is missing field `{0}`")]
    MissingField(String),

    /// A group URL without a usable path segment
    #[error("Cannot resolve group name from URL: {0}")]
    InvalidGroupUrl(String),

    /// The `time` field of an event could not be parsed
    #[error("Invalid event time: {0}")]
    InvalidTimestamp(String),

    /// Reading the group registry or writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The group registry is not valid TOML
    #[error("Invalid user group file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ImportError::MissingField(field.into())
    }

    /// Create a config error for missing env vars
    pub fn missing_env(var_name: &str) -> Self {
        ImportError::Config(format!("{} environment variable must be set", var_name))
    }
}

/// Result type alias for the import pipeline
pub type ImportResult<T> = Result<T, ImportError>;
