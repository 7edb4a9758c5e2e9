//! Configuration types.
//!
//! This module defines the enums and the client configuration struct shared by
//! the library and the command-line front end.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{API_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, USER_AGENT};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Client configuration (no CLI dependencies).
///
/// Holds the credentials and transport settings an [`ApiClient`](crate::ApiClient)
/// is built from. Treated as read-only once the client exists.
///
/// # Examples
///
/// ```no_run
/// use whois_history::Config;
///
/// let config = Config {
///     api_key: "your-api-key".to_string(),
///     timeout_seconds: 60,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// WHOIS XML API key
    pub api_key: String,

    /// API endpoint URL
    pub endpoint: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns the request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Checks every field and reports the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the offending field when:
    /// - `api_key` or `user_agent` is blank
    /// - `endpoint` is not an absolute `http`/`https` URL
    /// - `timeout_seconds` is 0 or above the supported maximum
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "api_key",
                "API key must not be empty. Pass --api-key or set WHOIS_HISTORY_API_KEY",
            ));
        }

        match url::Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigValidationError::new(
                    "endpoint",
                    format!("endpoint must use http or https, got '{}'", url.scheme()),
                ));
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "endpoint",
                    format!("endpoint '{}' is not a valid URL: {}", self.endpoint, e),
                ));
            }
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!(
                    "timeout_seconds must be greater than 0 and at most {}",
                    MAX_TIMEOUT_SECS
                ),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "user_agent must not be empty",
            ));
        }

        Ok(())
    }
}
