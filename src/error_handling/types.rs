//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::models::ErrorMessage;

/// Error returned by [`ApiClient`](crate::ApiClient) operations.
///
/// The first four variants classify the response body; they are mutually
/// exclusive and checked in declaration order. `Field` and `Transport` cover
/// failures outside that classification.
#[derive(Error, Debug)]
pub enum WhoisHistoryError {
    /// The API answered with a zero-length body.
    #[error("API returned an empty response")]
    EmptyResponse,

    /// The body is not JSON, or its top level is not an object.
    #[error("unparsable API response: {0}")]
    UnparsableResponse(String),

    /// The API reported a failure through `code`/`messages`.
    ///
    /// Displays as `[<code>] <message>`.
    #[error(transparent)]
    Remote(#[from] ErrorMessage),

    /// A well-formed success response without the payload key of the operation.
    #[error("API response has no '{key}' field")]
    EmptyResult {
        /// The missing key (`records` or `recordsCount`).
        key: &'static str,
    },

    /// A field was present but could not be coerced to its target type.
    #[error("malformed response field: {0}")]
    Field(#[from] FieldError),

    /// The request could not be performed.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
}

/// Error raised while coercing a present response value.
///
/// Missing keys and explicit nulls never produce this; they take the field default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not convert to an integer.
    #[error("'{key}' is not an integer: {value}")]
    InvalidInteger {
        /// Mapping key of the value.
        key: String,
        /// JSON text of the value.
        value: String,
    },

    /// The value does not parse as `YYYY-MM-DDTHH:MM:SS±HH[:]MM`.
    #[error("'{key}' is not an ISO8601 timestamp: {value:?} ({reason})")]
    InvalidDateTime {
        /// Mapping key of the value.
        key: String,
        /// The offending string.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Error returned by [`parse_timestamp`](crate::models::parse_timestamp).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The text is not `YYYY-MM-DDTHH:MM:SS` immediately followed by a signed offset.
    #[error("expected YYYY-MM-DDTHH:MM:SS followed by a +HH:MM or +HHMM offset")]
    Malformed,

    /// The shape matches but a component is out of range.
    #[error(transparent)]
    OutOfRange(#[from] chrono::ParseError),
}

/// Categories of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The request could not be built (bad URL, bad parameters).
    Builder,
    /// Redirect policy violation.
    Redirect,
    /// The request timed out.
    Timeout,
    /// Sending the request failed.
    Request,
    /// Connection could not be established.
    Connect,
    /// Reading the response body failed.
    Body,
    /// The response body could not be decoded as text.
    Decode,
    /// A header name or value is not valid HTTP.
    InvalidHeader,
    /// Anything else.
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    /// Human-readable description of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "HTTP request builder error",
            TransportErrorKind::Redirect => "HTTP request redirect error",
            TransportErrorKind::Timeout => "HTTP request timeout error",
            TransportErrorKind::Request => "HTTP request error",
            TransportErrorKind::Connect => "HTTP request connect error",
            TransportErrorKind::Body => "HTTP request body error",
            TransportErrorKind::Decode => "HTTP response decode error",
            TransportErrorKind::InvalidHeader => "Invalid HTTP header",
            TransportErrorKind::Other => "HTTP request other error",
        }
    }
}

/// Failure of the transport collaborator to complete a round trip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// Failure category.
    pub kind: TransportErrorKind,
    /// Underlying error description.
    pub message: String,
}

impl TransportError {
    /// Creates a transport error of the given kind.
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A configuration field holds an unusable value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `Config` field.
    pub field: &'static str,
    /// What is wrong and how to fix it.
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The supplied configuration failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}
