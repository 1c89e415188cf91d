//! Serde adapters for wire values.
//!
//! Use with `#[serde(with = "...")]` on fields of RPC result types:
//!
//! ```rust
//! use rorg_domain::{ApiKeyStatus, Timestamp};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Snapshot {
//!     #[serde(with = "rorg_wire::with::api_key_status")]
//!     status: ApiKeyStatus,
//!     #[serde(with = "rorg_wire::with::timestamp")]
//!     at: Timestamp,
//! }
//!
//! let raw = r#"{"status":"running","at":"2019-01-02 15:04:05.5+01:00"}"#;
//! let snap: Snapshot = serde_json::from_str(raw).unwrap();
//! assert!(snap.status.is_running());
//! ```
//!
//! A value the parsers reject aborts deserialization of the enclosing document with the
//! [`WireError`](crate::WireError) message.

use crate::value::WireValue;
use serde::{Deserialize, Deserializer, Serializer, de};

fn serialize_wire<T: WireValue, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.to_wire())
}

fn deserialize_wire<'de, T: WireValue, D: Deserializer<'de>>(d: D) -> Result<T, D::Error> {
    let raw = String::deserialize(d)?;
    T::from_wire(&raw).map_err(de::Error::custom)
}

/// `Timestamp` as `yyyy-MM-dd HH:mm:ss.FFFFFF+HH:MM`.
pub mod timestamp {
    use rorg_domain::Timestamp;
    use serde::{Deserializer, Serializer};

    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(value: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
        super::serialize_wire(value, s)
    }

    /// # Errors
    /// Fails if the string does not match the wire layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Timestamp, D::Error> {
        super::deserialize_wire(d)
    }
}

/// `ApiKeyStatus` as `stopped` / `running`.
pub mod api_key_status {
    use rorg_domain::ApiKeyStatus;
    use serde::{Deserializer, Serializer};

    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(value: &ApiKeyStatus, s: S) -> Result<S::Ok, S::Error> {
        super::serialize_wire(value, s)
    }

    /// # Errors
    /// Fails on any token other than `stopped` or `running`.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ApiKeyStatus, D::Error> {
        super::deserialize_wire(d)
    }
}
