//! Result object of the `getUsage` method.

use crate::error::{WireError, WireErrorExt};
use rorg_domain::{ApiKeyStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// Usage counters and state of an API key.
///
/// ```json
/// {
///   "status": "running",
///   "creationTime": "2013-02-01 17:53:40.000000+00:00",
///   "bitsLeft": 998532,
///   "requestsLeft": 199996,
///   "totalBits": 1646421,
///   "totalRequests": 65036
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    #[serde(with = "crate::with::api_key_status")]
    pub status: ApiKeyStatus,
    #[serde(with = "crate::with::timestamp")]
    pub creation_time: Timestamp,
    pub bits_left: i64,
    pub requests_left: i64,
    pub total_bits: i64,
    pub total_requests: i64,
}

impl KeyUsage {
    /// Decodes a `getUsage` result object.
    ///
    /// # Errors
    /// Returns [`WireError::Json`] if the document is malformed, a field is missing, or a
    /// wire value inside it is rejected by the parsers.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str::<Self>(json).context("Decoding getUsage result")
    }

    /// Encodes the object back into its wire shape.
    ///
    /// # Errors
    /// Returns [`WireError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(WireError::from)
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.bits_left <= 0 || self.requests_left <= 0
    }
}
