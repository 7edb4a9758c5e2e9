//! WHOIS History API client.
//!
//! [`ApiClient`] assembles the query for an operation, hands it to its
//! [`Transport`], classifies the body and extracts the operation's payload.

mod options;
mod response;

use std::sync::Arc;

use crate::config::{
    Config, API_URL, OUTPUT_FORMAT, PARAM_API_KEY, PARAM_DOMAIN_NAME, PARAM_MODE,
    PARAM_OUTPUT_FORMAT,
};
use crate::error_handling::{InitializationError, WhoisHistoryError};
use crate::initialization::init_transport;
use crate::models::{JsonMap, WhoisRecord};
use crate::transport::{Transport, TransportRequest};

pub use options::{DateFilter, SearchOptions};
pub use response::{extract_records, extract_records_count, parse_response};

/// Lookup mode sent as the `mode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full records; billed by the API.
    Purchase,
    /// Record count only; not billed.
    Preview,
}

impl Mode {
    /// Value of the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Purchase => "purchase",
            Mode::Preview => "preview",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the WHOIS History API.
///
/// Stateless between calls: every operation performs exactly one request
/// through the configured transport.
///
/// # Example
///
/// ```no_run
/// use whois_history::{ApiClient, SearchOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new("your-api-key")?;
/// let count = client.preview("example.com", &SearchOptions::default()).await?;
/// if count > 0 {
///     let records = client.purchase("example.com", &SearchOptions::default()).await?;
///     for record in records {
///         println!("{} {}", record.domain_name, record.registrar_name);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    api_key: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the public endpoint using the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the API key is blank or the HTTP
    /// client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, InitializationError> {
        Self::from_config(&Config {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if validation fails, or
    /// `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let transport = init_transport(config)?;
        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            transport,
        })
    }

    /// Creates a client for the public endpoint that sends requests through `transport`.
    pub fn with_transport(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: API_URL.to_string(),
            transport,
        }
    }

    /// Replaces the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces the transport.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// Endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the historic WHOIS records of `domain_name`. Billed by the API.
    ///
    /// Records are returned in response order.
    ///
    /// # Errors
    ///
    /// Any [`WhoisHistoryError`]; `EmptyResult` when the response has no
    /// `records` key.
    pub async fn purchase(
        &self,
        domain_name: &str,
        options: &SearchOptions,
    ) -> Result<Vec<WhoisRecord>, WhoisHistoryError> {
        let parsed = self.call_api(domain_name, Mode::Purchase, options).await?;
        let records = extract_records(&parsed)?;
        log::info!(
            "Purchased {} historic WHOIS record(s) for {}",
            records.len(),
            domain_name
        );
        Ok(records)
    }

    /// Counts the historic WHOIS records of `domain_name`. Not billed.
    ///
    /// # Errors
    ///
    /// Any [`WhoisHistoryError`]; `EmptyResult` when the response has no
    /// `recordsCount` key.
    pub async fn preview(
        &self,
        domain_name: &str,
        options: &SearchOptions,
    ) -> Result<i64, WhoisHistoryError> {
        let parsed = self.call_api(domain_name, Mode::Preview, options).await?;
        let count = extract_records_count(&parsed)?;
        log::info!("{} historic WHOIS record(s) available for {}", count, domain_name);
        Ok(count)
    }

    /// Builds the request for one operation.
    pub fn build_request(
        &self,
        domain_name: &str,
        mode: Mode,
        options: &SearchOptions,
    ) -> TransportRequest {
        let mut request = TransportRequest::get(self.endpoint.as_str());
        request.query = vec![
            (PARAM_DOMAIN_NAME.to_string(), domain_name.to_string()),
            (PARAM_API_KEY.to_string(), self.api_key.clone()),
            (PARAM_OUTPUT_FORMAT.to_string(), OUTPUT_FORMAT.to_string()),
            (PARAM_MODE.to_string(), mode.as_str().to_string()),
        ];
        request.query.extend(options.query_params());
        request
    }

    async fn call_api(
        &self,
        domain_name: &str,
        mode: Mode,
        options: &SearchOptions,
    ) -> Result<JsonMap, WhoisHistoryError> {
        let request = self.build_request(domain_name, mode, options);
        log::debug!("Requesting {} for {}", mode, domain_name);

        let response = self.transport.request(request).await?;
        parse_response(&response.body)
    }
}
