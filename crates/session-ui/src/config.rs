//! Client and logging configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Connection settings for the session server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Whole-request timeout
    pub request_timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Where the session cookie is kept between runs (none = not persisted)
    pub cookie_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            cookie_file: None,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_UI_BASE_URL`: Server origin (default: http://localhost:8080)
    /// - `SESSION_UI_TIMEOUT_SECS`: Request timeout (default: 5)
    /// - `SESSION_UI_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 2)
    /// - `SESSION_UI_COOKIE_FILE`: Session cookie file (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("SESSION_UI_BASE_URL").unwrap_or(defaults.base_url),

            request_timeout: env::var("SESSION_UI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),

            connect_timeout: env::var("SESSION_UI_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),

            cookie_file: env::var_os("SESSION_UI_COOKIE_FILE").map(PathBuf::from),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error), used when
    /// `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,

    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,

    /// Write logs to stderr when no file is set
    pub console_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            log_file: None,
            console_output: true,
        }
    }
}

impl LogConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_UI_LOG_LEVEL`: Log level (default: info)
    /// - `SESSION_UI_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `SESSION_UI_LOG_FILE`: Log file path (default: unset)
    /// - `SESSION_UI_CONSOLE_OUTPUT`: Enable stderr output (default: true)
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("SESSION_UI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("SESSION_UI_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            log_file: env::var_os("SESSION_UI_LOG_FILE").map(PathBuf::from),

            console_output: env::var("SESSION_UI_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
