//! Typed domain records of the WHOIS History API.
//!
//! Records are built from decoded JSON objects with field-by-field defaulting:
//! - missing or `null` text fields become empty strings
//! - missing or `null` lists become empty, and so do non-list values
//! - missing or `null` timestamps become `None`
//! - nested objects are `Some` only when their key is present
//!
//! Present values that cannot be coerced (a non-numeric `code`, an unparseable
//! timestamp) are reported as [`FieldError`](crate::error_handling::FieldError).

mod coerce;
mod types;

pub use coerce::{
    datetime_value, integer_value, parse_timestamp, string_list_value, string_value, JsonMap,
};
pub use types::{Audit, Contact, ErrorMessage, WhoisRecord};

pub(crate) use coerce::json_type_name;
