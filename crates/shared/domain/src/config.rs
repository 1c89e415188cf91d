use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_FRACTION_DIGITS, DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECONDS,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level SDK configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SdkConfigInner {
    pub client: ClientConfig,
    pub wire: WireConfig,
    /// Locale handed to the string provider when rendering user-facing text.
    pub locale: String,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SdkConfig {
    #[serde(flatten, default)]
    inner: Arc<SdkConfigInner>,
}

impl Deref for SdkConfig {
    type Target = SdkConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SdkConfig {
    fn deref_mut(&mut self) -> &mut SdkConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// JSON-RPC transport settings consumed by the RPC layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    /// Never logged.
    pub api_key: Option<String>,
}

/// Wire-format knobs.
///
/// Raw numbers here; `rorg_wire::TimestampLayout::try_from` validates them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    pub fraction_digits: u8,
    pub variable_fraction: bool,
}

// --- Default ---

impl Default for SdkConfigInner {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            wire: WireConfig::default(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            api_key: None,
        }
    }
}

impl Default for WireConfig {
    fn default() -> Self {
        Self { fraction_digits: DEFAULT_FRACTION_DIGITS, variable_fraction: true }
    }
}
