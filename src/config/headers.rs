//! HTTP header and query parameter name constants.

/// Media type requested from the API.
pub const ACCEPT_JSON: &str = "application/json";

// Query parameter names understood by the API
/// Domain the history is requested for
pub const PARAM_DOMAIN_NAME: &str = "domainName";
/// Account API key
pub const PARAM_API_KEY: &str = "apiKey";
/// Response serialization
pub const PARAM_OUTPUT_FORMAT: &str = "outputFormat";
/// `purchase` or `preview`
pub const PARAM_MODE: &str = "mode";

// Top-level response keys
/// Error code of a failed request
pub const KEY_CODE: &str = "code";
/// Error message of a failed request
pub const KEY_MESSAGES: &str = "messages";
/// Record list of a purchase response
pub const KEY_RECORDS: &str = "records";
/// Record count of a preview response
pub const KEY_RECORDS_COUNT: &str = "recordsCount";
