//! Unified error types for fridgewatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error fetching readings or limits from the backend
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error dispatching an alert notification
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (file operations, terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the sensor feed and limit clients
///
/// A fetch failure aborts the current polling cycle; previously displayed
/// readings and any queued alerts are retained.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-2xx HTTP response
    #[error("HTTP {status} from {endpoint}")]
    Http { endpoint: String, status: u16 },

    /// Network-level failure (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be deserialized
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

/// Errors from the alert email endpoint
///
/// Notification is a best-effort side channel. These errors are logged and
/// swallowed by the dispatch task; they never reach the polling cycle.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Non-2xx HTTP response from the alert endpoint
    #[error("Alert endpoint returned HTTP {0}")]
    Http(u16),

    /// Network-level failure
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
