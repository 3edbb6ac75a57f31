//! Error types for the session client.

use thiserror::Error;

/// Errors that can occur when talking to the session server.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot connect to {0}")]
    Connection(String),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Cookie file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logging initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}
