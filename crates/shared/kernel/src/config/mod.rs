use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix for environment overrides (`RORG__WIRE__FRACTION_DIGITS=3`).
pub const ENV_PREFIX: &str = "RORG";
/// File stem used when no path is given; the extension is detected (`rorg.toml`, `rorg.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "rorg";

const SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[rorg_derive::rorg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration source: a required file, then `RORG__*` overrides.
///
/// Environment overrides come from the process environment unless replaced with
/// [`ConfigLoader::env_vars`], which keeps tests away from global state.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base file. Without an extension every supported format is probed.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Uses `vars` instead of the process environment for overrides.
    #[must_use]
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the
    /// merged values do not match the structure of `T`.
    pub fn load<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let path = self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let injected = self.env.is_some();

        let builder = Config::builder()
            .add_source(File::from(path.as_path()).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(SEPARATOR)
                    .separator(SEPARATOR)
                    .try_parsing(true)
                    .source(self.env),
            );

        info!("Loading config from {}", path.display());
        debug!(injected_env = injected, "Environment overrides prefixed with {ENV_PREFIX}{SEPARATOR}");

        builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: settings from `path`, or from the `rorg` file in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `RORG__`. Nested keys use double
///    underscores (e.g., `RORG__CLIENT__TIMEOUT_SECONDS` maps to `client.timeout_seconds`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use rorg_domain::config::SdkConfig;
/// use rorg_kernel::config::load_config;
///
/// let cfg: SdkConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert!(!cfg.locale.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    let loader = match path {
        Some(p) => loader.path(p.as_ref()),
        None => loader,
    };
    loader.load()
}
