//! whois_history library: client for the WHOIS History API
//!
//! This library looks up the historic WHOIS records of a domain. A preview
//! returns the number of matching records free of charge; a purchase returns
//! the records themselves as typed [`WhoisRecord`] values.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use whois_history::{ApiClient, SearchOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("your-api-key")?;
//! let options = SearchOptions::new().since_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
//!
//! let count = client.preview("example.com", &options).await?;
//! println!("{} records available", count);
//!
//! for record in client.purchase("example.com", &options).await? {
//!     println!("{:?} {}", record.created_date_iso8601, record.registrar_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every response is classified before any record is built: an empty body,
//! an unparsable body, an error reported by the API (`[<code>] <message>`),
//! or a success response missing its payload each map to a distinct
//! [`WhoisHistoryError`] variant.
//!
//! # Requirements
//!
//! Operations are `async` and need a Tokio runtime. The network layer is the
//! [`Transport`] trait, so tests can run the client without one.

#![warn(missing_docs)]

pub mod cli;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod models;
pub mod transport;

// Re-export public API
pub use client::{
    extract_records, extract_records_count, parse_response, ApiClient, DateFilter, Mode,
    SearchOptions,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, ConfigValidationError, FieldError, InitializationError,
    TimestampError, TransportError, TransportErrorKind, WhoisHistoryError,
};
pub use models::{Audit, Contact, ErrorMessage, WhoisRecord};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
