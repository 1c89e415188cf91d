//! Wire tokens and service defaults.

/// Wire token of [`ApiKeyStatus::Stopped`](crate::ApiKeyStatus::Stopped).
pub const STOPPED: &str = "stopped";
/// Wire token of [`ApiKeyStatus::Running`](crate::ApiKeyStatus::Running).
pub const RUNNING: &str = "running";

/// Release 4 JSON-RPC endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.random.org/json-rpc/4/invoke";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_LOCALE: &str = "en";

/// Fraction digits the service writes in timestamps.
pub const DEFAULT_FRACTION_DIGITS: u8 = 6;
