//! # Wire Values
//!
//! Strict conversion of the strings the random.org JSON-RPC service sends into typed
//! domain values.
//!
//! ## Parsers
//!
//! * [`parse_timestamp`]: `yyyy-MM-dd HH:mm:ss.FFFFFF±HH:MM` into a UTC
//!   [`Timestamp`](rorg_domain::Timestamp). Use [`TimestampLayout`] when the fraction
//!   precision differs from the service default.
//! * [`parse_api_key_status`]: `stopped` / `running` into
//!   [`ApiKeyStatus`](rorg_domain::ApiKeyStatus).
//!
//! Both are pure functions: no I/O, no logging, no shared state. Call them from any thread.
//!
//! ## Errors
//!
//! A layout mismatch is [`WireError::Format`]. An unknown token for a closed set is
//! [`WireError::UnsupportedValue`], which means the client and the service disagree on
//! the protocol. Neither is recovered here; the RPC layer decides what to do.
//!
//! ## Serde
//!
//! [`with`] holds `#[serde(with = "...")]` adapters; [`KeyUsage`] shows them in use.

mod error;
mod status;
mod timestamp;
mod usage;
mod value;
pub mod with;

pub use crate::error::{WireError, WireErrorExt};
pub use crate::status::{API_KEY_STATUS, parse_api_key_status};
pub use crate::timestamp::{TimestampLayout, format_timestamp, parse_timestamp};
pub use crate::usage::KeyUsage;
pub use crate::value::WireValue;
