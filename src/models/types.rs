//! Historic WHOIS data structures.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::coerce::{
    datetime_value, integer_value, object_or_empty, string_list_value, string_value, JsonMap,
};
use crate::config::{KEY_CODE, KEY_MESSAGES};
use crate::error_handling::FieldError;

/// Dates when a WHOIS record was added to and last updated in the provider's database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    /// When the record was first stored
    pub created_date: Option<DateTime<FixedOffset>>,
    /// When the record was last updated
    pub updated_date: Option<DateTime<FixedOffset>>,
}

impl Audit {
    /// Builds an `Audit` from its JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if a date is present but malformed.
    pub fn from_map(values: &JsonMap) -> Result<Self, FieldError> {
        Ok(Self {
            created_date: datetime_value(values, "createdDate")?,
            updated_date: datetime_value(values, "updatedDate")?,
        })
    }
}

/// A flattened postal/contact record. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact name
    pub name: String,
    /// Organization
    pub organization: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
    /// Email address
    pub email: String,
    /// Telephone number
    pub telephone: String,
    /// Telephone extension
    pub telephone_ext: String,
    /// Fax number
    pub fax: String,
    /// Fax extension
    pub fax_ext: String,
    /// Unparsed contact section
    pub raw_text: String,
}

impl Contact {
    /// Builds a `Contact` from its JSON object. Never fails.
    pub fn from_map(values: &JsonMap) -> Self {
        Self {
            name: string_value(values, "name"),
            organization: string_value(values, "organization"),
            street: string_value(values, "street"),
            city: string_value(values, "city"),
            state: string_value(values, "state"),
            postal_code: string_value(values, "postalCode"),
            country: string_value(values, "country"),
            email: string_value(values, "email"),
            telephone: string_value(values, "telephone"),
            telephone_ext: string_value(values, "telephoneExt"),
            fax: string_value(values, "fax"),
            fax_ext: string_value(values, "faxExt"),
            raw_text: string_value(values, "rawText"),
        }
    }
}

/// One historical WHOIS snapshot of a domain.
///
/// Nested `audit` and contact fields are `Some` exactly when their key is
/// present in the source object, whatever that key holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisRecord {
    /// Domain the record belongs to
    pub domain_name: String,
    /// `added`, `updated` or `dropped`
    pub domain_type: String,
    /// Creation date from the WHOIS record
    #[serde(rename = "createdDateISO8601")]
    pub created_date_iso8601: Option<DateTime<FixedOffset>>,
    /// Last update date from the WHOIS record
    #[serde(rename = "updatedDateISO8601")]
    pub updated_date_iso8601: Option<DateTime<FixedOffset>>,
    /// Expiration date from the WHOIS record
    #[serde(rename = "expiresDateISO8601")]
    pub expires_date_iso8601: Option<DateTime<FixedOffset>>,
    /// Creation date as written in the WHOIS record
    pub created_date_raw: String,
    /// Update date as written in the WHOIS record
    pub updated_date_raw: String,
    /// Expiration date as written in the WHOIS record
    pub expires_date_raw: String,
    /// Storage dates of this snapshot
    pub audit: Option<Audit>,
    /// Name servers
    pub name_servers: Vec<String>,
    /// WHOIS server that answered
    pub whois_server: String,
    /// Registrar
    pub registrar_name: String,
    /// EPP status codes
    pub status: Vec<String>,
    /// WHOIS text without legal disclaimers
    pub clean_text: String,
    /// Full WHOIS text
    pub raw_text: String,
    /// Registrant
    pub registrant_contact: Option<Contact>,
    /// Administrative contact
    pub administrative_contact: Option<Contact>,
    /// Technical contact
    pub technical_contact: Option<Contact>,
    /// Billing contact
    pub billing_contact: Option<Contact>,
    /// Zone contact
    pub zone_contact: Option<Contact>,
}

impl WhoisRecord {
    /// Builds a record from one element of the `records` list.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if a timestamp (top-level or in `audit`) is
    /// present but malformed.
    pub fn from_map(values: &JsonMap) -> Result<Self, FieldError> {
        let audit = match values.get("audit") {
            Some(value) => Some(Audit::from_map(&object_or_empty(value))?),
            None => None,
        };

        Ok(Self {
            domain_name: string_value(values, "domainName"),
            domain_type: string_value(values, "domainType"),
            created_date_iso8601: datetime_value(values, "createdDateISO8601")?,
            updated_date_iso8601: datetime_value(values, "updatedDateISO8601")?,
            expires_date_iso8601: datetime_value(values, "expiresDateISO8601")?,
            created_date_raw: string_value(values, "createdDateRaw"),
            updated_date_raw: string_value(values, "updatedDateRaw"),
            expires_date_raw: string_value(values, "expiresDateRaw"),
            audit,
            name_servers: string_list_value(values, "nameServers"),
            whois_server: string_value(values, "whoisServer"),
            registrar_name: string_value(values, "registrarName"),
            status: string_list_value(values, "status"),
            clean_text: string_value(values, "cleanText"),
            raw_text: string_value(values, "rawText"),
            registrant_contact: nested_contact(values, "registrantContact"),
            administrative_contact: nested_contact(values, "administrativeContact"),
            technical_contact: nested_contact(values, "technicalContact"),
            billing_contact: nested_contact(values, "billingContact"),
            zone_contact: nested_contact(values, "zoneContact"),
        })
    }

    /// Builds a record from any JSON value; non-objects are read as an empty object.
    pub(crate) fn from_value(value: &Value) -> Result<Self, FieldError> {
        Self::from_map(&object_or_empty(value))
    }
}

fn nested_contact(values: &JsonMap, key: &str) -> Option<Contact> {
    values
        .get(key)
        .map(|value| Contact::from_map(&object_or_empty(value)))
}

/// A failure reported by the API in the response body.
///
/// Displays as `[<code>] <message>`.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("[{code}] {message}")]
pub struct ErrorMessage {
    /// Error code, usually an HTTP status
    pub code: i64,
    /// Error description from `messages`
    pub message: String,
}

impl ErrorMessage {
    /// Builds an error from a response carrying `code` and/or `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidInteger`] if `code` is not numeric.
    pub fn from_map(values: &JsonMap) -> Result<Self, FieldError> {
        Ok(Self {
            code: integer_value(values, KEY_CODE)?,
            message: string_value(values, KEY_MESSAGES),
        })
    }
}
