//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, user agent, formats)
//! - Query parameter and response key names
//! - Logging option types and the client `Config`

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
