//! Error handling.
//!
//! This module provides:
//! - The error returned by client operations and its classification of responses
//! - Field coercion, transport, configuration and initialization errors
//! - Categorization of `reqwest` failures into transport error kinds

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ConfigValidationError, FieldError, InitializationError, TimestampError, TransportError,
    TransportErrorKind, WhoisHistoryError,
};
