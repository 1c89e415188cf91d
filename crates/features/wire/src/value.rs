//! Uniform access to the wire parsers, keyed by target type.

use crate::error::WireError;
use crate::status::parse_api_key_status;
use crate::timestamp::{format_timestamp, parse_timestamp};
use rorg_domain::{ApiKeyStatus, Timestamp};

/// A typed value with a textual wire form.
pub trait WireValue: Sized {
    /// # Errors
    /// Returns the [`WireError`] of the underlying parser.
    fn from_wire(value: &str) -> Result<Self, WireError>;

    fn to_wire(&self) -> String;
}

impl WireValue for Timestamp {
    fn from_wire(value: &str) -> Result<Self, WireError> {
        parse_timestamp(value)
    }

    fn to_wire(&self) -> String {
        format_timestamp(self)
    }
}

impl WireValue for ApiKeyStatus {
    fn from_wire(value: &str) -> Result<Self, WireError> {
        parse_api_key_status(value)
    }

    fn to_wire(&self) -> String {
        self.as_wire().to_owned()
    }
}
