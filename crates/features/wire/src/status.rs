use crate::error::WireError;
use rorg_domain::ApiKeyStatus;
use rorg_domain::constants::{RUNNING, STOPPED};

/// Name used for API key statuses in [`WireError::UnsupportedValue`].
pub const API_KEY_STATUS: &str = "api key status";

/// Maps a wire status token to an [`ApiKeyStatus`].
///
/// Matching is exact: no trimming, no case folding.
///
/// # Errors
/// Returns [`WireError::UnsupportedValue`] for any token other than `stopped` or `running`.
/// That signals a protocol mismatch with the service, not bad user input.
///
/// # Example
/// ```rust
/// use rorg_domain::ApiKeyStatus;
/// use rorg_wire::{WireError, parse_api_key_status};
///
/// assert_eq!(parse_api_key_status("running").unwrap(), ApiKeyStatus::Running);
/// assert!(matches!(
///     parse_api_key_status("Running"),
///     Err(WireError::UnsupportedValue { .. })
/// ));
/// ```
pub fn parse_api_key_status(value: &str) -> Result<ApiKeyStatus, WireError> {
    match value {
        STOPPED => Ok(ApiKeyStatus::Stopped),
        RUNNING => Ok(ApiKeyStatus::Running),
        other => Err(WireError::UnsupportedValue {
            kind: API_KEY_STATUS,
            value: other.to_owned(),
            context: None,
        }),
    }
}
