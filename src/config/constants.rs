//! Configuration constants.
//!
//! Endpoint, identification and formatting values shared by the client, the
//! transport and the CLI.

/// WHOIS History API endpoint.
pub const API_URL: &str = "https://whois-history.whoisxmlapi.com/api/v1";

/// Product-identifying User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("whoishistory-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable the CLI reads the API key from.
pub const API_KEY_ENV: &str = "WHOIS_HISTORY_API_KEY";

/// Format of the date filters sent as query parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format applied to ISO8601 timestamps after offset normalization.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Value of the `outputFormat` query parameter.
pub const OUTPUT_FORMAT: &str = "JSON";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound accepted by `Config::validate` for the request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 600;
