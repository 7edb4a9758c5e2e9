// Shared test helpers: a transport double that records requests and replays
// a canned response.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use whois_history::{
    ApiClient, Transport, TransportError, TransportErrorKind, TransportRequest, TransportResponse,
};

/// Transport that answers every request with the same outcome.
#[allow(dead_code)] // Used by other test files
pub struct MockTransport {
    outcome: Result<TransportResponse, TransportError>,
    requests: Mutex<Vec<TransportRequest>>,
}

#[allow(dead_code)]
impl MockTransport {
    /// Replies with `body` and HTTP 200.
    pub fn with_body(body: &str) -> Arc<Self> {
        Self::with_status(200, body)
    }

    /// Replies with `body` and the given status.
    pub fn with_status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Fails every request with a connect error.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(TransportError::new(TransportErrorKind::Connect, message)),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone()
    }
}

/// Client with API key `test` whose transport is `transport`.
#[allow(dead_code)]
pub fn client_with(transport: &Arc<MockTransport>) -> ApiClient {
    ApiClient::with_transport("test", transport.clone())
}
