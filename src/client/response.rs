//! Response discrimination and payload extraction.

use serde_json::Value;

use crate::config::{KEY_CODE, KEY_MESSAGES, KEY_RECORDS, KEY_RECORDS_COUNT};
use crate::error_handling::WhoisHistoryError;
use crate::models::{integer_value, ErrorMessage, JsonMap, WhoisRecord};

/// Classifies a response body and returns its top-level object on success.
///
/// Checks run in order: empty body, JSON object parse, remote error shape.
/// The HTTP status plays no part.
///
/// # Errors
///
/// - [`WhoisHistoryError::EmptyResponse`] for a zero-length body
/// - [`WhoisHistoryError::UnparsableResponse`] for invalid JSON or a non-object top level
/// - [`WhoisHistoryError::Remote`] when `code` or `messages` is present
/// - [`WhoisHistoryError::Field`] when a remote error carries a non-numeric `code`
pub fn parse_response(text: &str) -> Result<JsonMap, WhoisHistoryError> {
    if text.is_empty() {
        return Err(WhoisHistoryError::EmptyResponse);
    }

    let parsed = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(WhoisHistoryError::UnparsableResponse(format!(
                "expected a JSON object at the top level, found {}",
                crate::models::json_type_name(&other)
            )));
        }
        Err(e) => return Err(WhoisHistoryError::UnparsableResponse(e.to_string())),
    };

    if parsed.contains_key(KEY_CODE) || parsed.contains_key(KEY_MESSAGES) {
        let error = ErrorMessage::from_map(&parsed)?;
        log::debug!("API reported an error: {}", error);
        return Err(WhoisHistoryError::Remote(error));
    }

    Ok(parsed)
}

/// Builds one record per element of `records`, preserving order.
///
/// A `records` value that is not a list yields no records.
///
/// # Errors
///
/// [`WhoisHistoryError::EmptyResult`] without a `records` key, or
/// [`WhoisHistoryError::Field`] for a malformed record field.
pub fn extract_records(parsed: &JsonMap) -> Result<Vec<WhoisRecord>, WhoisHistoryError> {
    let records = parsed
        .get(KEY_RECORDS)
        .ok_or(WhoisHistoryError::EmptyResult { key: KEY_RECORDS })?;

    match records {
        Value::Array(items) => items
            .iter()
            .map(|item| WhoisRecord::from_value(item).map_err(WhoisHistoryError::from))
            .collect(),
        other => {
            log::warn!(
                "'{}' should be a list but is a {}; returning no records",
                KEY_RECORDS,
                crate::models::json_type_name(other)
            );
            Ok(Vec::new())
        }
    }
}

/// Reads `recordsCount` as an integer.
///
/// # Errors
///
/// [`WhoisHistoryError::EmptyResult`] without a `recordsCount` key, or
/// [`WhoisHistoryError::Field`] when it is not numeric.
pub fn extract_records_count(parsed: &JsonMap) -> Result<i64, WhoisHistoryError> {
    if !parsed.contains_key(KEY_RECORDS_COUNT) {
        return Err(WhoisHistoryError::EmptyResult {
            key: KEY_RECORDS_COUNT,
        });
    }
    Ok(integer_value(parsed, KEY_RECORDS_COUNT)?)
}
