//! HTTP client initialization.
//!
//! This module provides functions to build the `reqwest` client and the
//! transport the API client sends its requests through.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::transport::{HttpTransport, Transport};

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` with the timeout from the config. The
/// User-Agent is set per request by [`HttpTransport`].
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new().timeout(config.timeout()).build()
}

/// Initializes the transport used by [`ApiClient`](crate::ApiClient).
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_transport(config: &Config) -> Result<Arc<dyn Transport>, InitializationError> {
    let client = init_client(config)?;
    Ok(Arc::new(HttpTransport::with_client(
        client,
        config.user_agent.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_transport_with_defaults() {
        assert!(init_transport(&Config::default()).is_ok());
    }
}
