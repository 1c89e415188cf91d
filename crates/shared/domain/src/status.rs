use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Whether an API key is currently accepted by the service.
///
/// Displays and serializes as the exact wire token (`stopped` / `running`). It has no
/// `FromStr` or `Deserialize`: decode through
/// `rorg_wire::parse_api_key_status` or `rorg_wire::with::api_key_status`, which report an
/// unknown token as `UnsupportedValue` rather than a generic parse error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiKeyStatus {
    /// The key has been disabled and requests signed with it are refused.
    Stopped,
    /// The key is active.
    Running,
}

impl ApiKeyStatus {
    /// Returns the wire token for this status.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RUNNING, STOPPED};
    use strum::IntoEnumIterator;

    #[test]
    fn wire_tokens_match_constants() {
        assert_eq!(ApiKeyStatus::Stopped.as_wire(), STOPPED);
        assert_eq!(ApiKeyStatus::Running.as_wire(), RUNNING);
        assert_eq!(ApiKeyStatus::Running.to_string(), RUNNING);
        assert_eq!(ApiKeyStatus::Stopped.as_ref(), STOPPED);
    }

    #[test]
    fn serializes_as_wire_token() {
        assert_eq!(serde_json::to_string(&ApiKeyStatus::Running).unwrap(), r#""running""#);
        assert_eq!(serde_json::to_string(&ApiKeyStatus::Stopped).unwrap(), r#""stopped""#);
    }

    #[test]
    fn every_variant_has_a_distinct_token() {
        let tokens: Vec<_> = ApiKeyStatus::iter().map(ApiKeyStatus::as_wire).collect();
        assert_eq!(tokens, [STOPPED, RUNNING]);
    }
}
