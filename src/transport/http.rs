//! Reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

use super::{Transport, TransportRequest, TransportResponse};
use crate::config::ACCEPT_JSON;
use crate::error_handling::{TransportError, TransportErrorKind};

/// Transport that performs requests with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    user_agent: String,
}

impl HttpTransport {
    /// Builds a transport with its own client and request timeout.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if client creation fails.
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, user_agent))
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    /// The User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::with_capacity(extra.len() + 2);
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                TransportError::new(
                    TransportErrorKind::InvalidHeader,
                    format!("header name '{}': {}", name, e),
                )
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                TransportError::new(
                    TransportErrorKind::InvalidHeader,
                    format!("value of header '{}': {}", name, e),
                )
            })?;
            headers.insert(name, value);
        }

        // Always last so caller values for these two names are replaced
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|e| {
            TransportError::new(
                TransportErrorKind::InvalidHeader,
                format!("User-Agent '{}': {}", self.user_agent, e),
            )
        })?;
        headers.insert(USER_AGENT, user_agent);

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let headers = self.build_headers(&request.headers)?;

        log::debug!("{} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(headers)
            .query(&request.query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("Received HTTP {} with {} byte body", status, body.len());

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::with_client(Client::new(), "test-user-agent")
    }

    #[test]
    fn test_build_headers_defaults() {
        let headers = transport().build_headers(&[]).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[USER_AGENT], "test-user-agent");
    }

    #[test]
    fn test_build_headers_overrides_accept_and_keeps_others() {
        let extra = vec![
            ("My-Header".to_string(), "value".to_string()),
            ("Accept".to_string(), "application/xml".to_string()),
        ];
        let headers = transport().build_headers(&extra).unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["my-header"], "value");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers.get_all(ACCEPT).iter().count(), 1);
    }

    #[test]
    fn test_build_headers_rejects_invalid_name() {
        let extra = vec![("bad header".to_string(), "value".to_string())];
        let err = transport().build_headers(&extra).unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::InvalidHeader);
    }

    #[test]
    fn test_build_headers_rejects_invalid_value() {
        let extra = vec![("X-Test".to_string(), "line\nbreak".to_string())];
        let err = transport().build_headers(&extra).unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::InvalidHeader);
    }

    #[test]
    fn test_new_sets_user_agent() {
        let transport = HttpTransport::new("whoishistory-rust/test", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.user_agent(), "whoishistory-rust/test");
    }
}
