//! Transport collaborator.
//!
//! The client never talks to the network directly: it hands a
//! [`TransportRequest`] to a [`Transport`] and classifies the returned body.
//! [`HttpTransport`] is the `reqwest` implementation; tests substitute their own.

mod http;

use async_trait::async_trait;
use reqwest::Method;

use crate::error_handling::TransportError;

pub use http::HttpTransport;

/// A single HTTP request to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Absolute URL without the query string.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Extra headers; `Accept` and `User-Agent` are always set by the transport.
    pub headers: Vec<(String, String)>,
    /// Query parameters in send order.
    pub query: Vec<(String, String)>,
}

impl TransportRequest {
    /// Creates a `GET` request with no headers or query parameters.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Returns the value of the first query parameter named `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code, informational only.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

/// Performs one HTTP round trip.
///
/// Implementations report only failures to complete the exchange; any HTTP
/// status is returned as a successful [`TransportResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response status and body.
    async fn request(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_defaults() {
        let request = TransportRequest::get("http://test.test/200");
        assert_eq!(request.url, "http://test.test/200");
        assert_eq!(request.method, Method::GET);
        assert!(request.headers.is_empty());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_query_param_lookup() {
        let mut request = TransportRequest::get("http://test.test/200");
        request.query.push(("mode".to_string(), "preview".to_string()));
        request.query.push(("mode".to_string(), "purchase".to_string()));
        assert_eq!(request.query_param("mode"), Some("preview"));
        assert_eq!(request.query_param("apiKey"), None);
    }
}
