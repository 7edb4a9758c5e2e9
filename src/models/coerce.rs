//! Field coercion primitives.
//!
//! Every extractor takes a decoded JSON object and a key. A missing key or an
//! explicit `null` yields the field default; a present value that cannot be
//! converted is a [`FieldError`], except for lists where a non-list value is
//! tolerated as empty.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde_json::{Map, Value};

use crate::config::TIMESTAMP_FORMAT;
use crate::error_handling::{FieldError, TimestampError};

/// A decoded JSON object.
pub type JsonMap = Map<String, Value>;

/// Matches a trailing `HH:MM` so `+05:00` can be rewritten as `+0500`.
const OFFSET_COLON_PATTERN: &str = r"(\d\d):(\d\d)$";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// The only accepted shape once the offset colon is removed.
const TIMESTAMP_SHAPE_PATTERN: &str = r"^\d{4}-\d\d-\d\dT\d\d:\d\d:\d\d[+-]\d{4}$";

static OFFSET_COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OFFSET_COLON_PATTERN, "OFFSET_COLON_RE"));

static TIMESTAMP_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TIMESTAMP_SHAPE_PATTERN, "TIMESTAMP_SHAPE_RE"));

/// Returns the natural string form of a JSON value.
///
/// Strings are taken verbatim, `null` becomes empty, and every other value is
/// rendered as JSON text (`42`, `true`, `["a"]`).
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Borrows the object inside `value`, or an empty object for anything else.
pub(crate) fn object_or_empty(value: &Value) -> Cow<'_, JsonMap> {
    match value {
        Value::Object(map) => Cow::Borrowed(map),
        other => {
            if !other.is_null() {
                log::debug!("Expected a JSON object, got {}; using defaults", json_type_name(other));
            }
            Cow::Owned(JsonMap::new())
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String form of `values[key]`, or an empty string.
pub fn string_value(values: &JsonMap, key: &str) -> String {
    values.get(key).map(value_to_string).unwrap_or_default()
}

/// Integer form of `values[key]`, or 0.
///
/// Accepts integral numbers, floats (truncated toward zero), booleans and
/// strings holding a decimal integer.
///
/// # Errors
///
/// Returns [`FieldError::InvalidInteger`] when the present value has no
/// integer interpretation.
pub fn integer_value(values: &JsonMap, key: &str) -> Result<i64, FieldError> {
    match values.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value_to_integer(value).ok_or_else(|| FieldError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn value_to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// String forms of the elements of `values[key]`, or an empty list.
///
/// A present value that is not a list is tolerated and yields an empty list.
pub fn string_list_value(values: &JsonMap, key: &str) -> Vec<String> {
    match values.get(key) {
        Some(Value::Array(items)) => items.iter().map(value_to_string).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            log::warn!(
                "Field '{}' should be a list but is a {}; treating it as empty",
                key,
                json_type_name(other)
            );
            Vec::new()
        }
    }
}

/// Timestamp parsed from `values[key]`, or `None`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidDateTime`] when the present value is not a
/// `YYYY-MM-DDTHH:MM:SS` timestamp with a `±HH:MM` or `±HHMM` offset.
pub fn datetime_value(
    values: &JsonMap,
    key: &str,
) -> Result<Option<DateTime<FixedOffset>>, FieldError> {
    match values.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let raw = value_to_string(value);
            parse_timestamp(&raw)
                .map(Some)
                .map_err(|e| FieldError::InvalidDateTime {
                    key: key.to_string(),
                    value: raw,
                    reason: e.to_string(),
                })
        }
    }
}

/// Parses an ISO8601 timestamp whose UTC offset may or may not contain a colon.
///
/// `2020-04-25T17:25:49+00:00` and `2020-04-25T17:25:49+0000` give the same instant.
/// The offset must follow the seconds directly; `Z` and whitespace are rejected.
///
/// # Errors
///
/// [`TimestampError::Malformed`] for any other shape, or
/// [`TimestampError::OutOfRange`] when a component is invalid (month 13, hour 25).
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let normalized = OFFSET_COLON_RE.replace(value, "${1}${2}");
    if !TIMESTAMP_SHAPE_RE.is_match(&normalized) {
        return Err(TimestampError::Malformed);
    }
    Ok(DateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT)?)
}
