//! # Localized Strings
//!
//! User-facing text is looked up by key through an injected [`StringProvider`]. The
//! locale is always an explicit argument: there is no process-wide "current culture".
//!
//! Build the provider once at start-up and hand it to whatever renders messages:
//!
//! ```rust
//! use rorg_kernel::strings::{Localizer, ResourceBundle, StringProvider};
//! use std::sync::Arc;
//!
//! let bundle = ResourceBundle::builder()
//!     .locale("en", [("key.stopped", "The API key has been stopped.")])
//!     .locale("uk", [("key.stopped", "API-ключ зупинено.")])
//!     .fallback("en")
//!     .build()
//!     .unwrap();
//!
//! let provider: Arc<dyn StringProvider> = Arc::new(bundle);
//! let strings = Localizer::new(provider, "uk");
//! assert_eq!(strings.get("key.stopped").as_deref(), Some("API-ключ зупинено."));
//! ```

use fxhash::FxHashMap;
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

#[rorg_derive::rorg_error]
pub enum StringsError {
    /// The bundle was configured with a fallback locale that has no table.
    #[error("Unknown locale{}: {locale}", format_context(.context))]
    UnknownLocale { locale: String, context: Option<Cow<'static, str>> },
}

/// Resolves text by key for an explicitly given locale.
pub trait StringProvider: Debug + Send + Sync {
    /// Returns `None` when neither the locale nor any provider-defined fallback has `name`.
    fn get_string(&self, name: &str, locale: &str) -> Option<Cow<'_, str>>;
}

/// In-memory string tables keyed by locale, with an optional fallback locale.
#[derive(Debug, Default, Clone)]
pub struct ResourceBundle {
    tables: FxHashMap<String, FxHashMap<String, String>>,
    fallback: Option<String>,
}

impl ResourceBundle {
    #[must_use]
    pub fn builder() -> ResourceBundleBuilder {
        ResourceBundleBuilder::default()
    }

    fn lookup(&self, locale: &str, name: &str) -> Option<&str> {
        self.tables.get(locale)?.get(name).map(String::as_str)
    }
}

impl StringProvider for ResourceBundle {
    fn get_string(&self, name: &str, locale: &str) -> Option<Cow<'_, str>> {
        self.lookup(locale, name)
            .or_else(|| self.fallback.as_deref().and_then(|fb| self.lookup(fb, name)))
            .map(Cow::Borrowed)
    }
}

#[derive(Debug, Default)]
pub struct ResourceBundleBuilder {
    tables: FxHashMap<String, FxHashMap<String, String>>,
    fallback: Option<String>,
}

impl ResourceBundleBuilder {
    /// Adds entries to the table of `locale`. Later entries replace earlier ones.
    #[must_use]
    pub fn locale<I, K, V>(mut self, locale: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables
            .entry(locale.into())
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Locale consulted when the requested one lacks a key.
    #[must_use]
    pub fn fallback(mut self, locale: impl Into<String>) -> Self {
        self.fallback = Some(locale.into());
        self
    }

    /// # Errors
    /// Returns [`StringsError::UnknownLocale`] if the fallback locale has no table.
    pub fn build(self) -> Result<ResourceBundle, StringsError> {
        if let Some(fallback) = &self.fallback
            && !self.tables.contains_key(fallback)
        {
            return Err(StringsError::UnknownLocale {
                locale: fallback.clone(),
                context: Some("fallback locale must be registered".into()),
            });
        }

        Ok(ResourceBundle { tables: self.tables, fallback: self.fallback })
    }
}

/// A provider bound to one locale, for consumers that render many messages.
#[derive(Debug, Clone)]
pub struct Localizer {
    provider: Arc<dyn StringProvider>,
    locale: String,
}

impl Localizer {
    pub fn new(provider: Arc<dyn StringProvider>, locale: impl Into<String>) -> Self {
        Self { provider, locale: locale.into() }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.provider.get_string(name, &self.locale)
    }

    /// Like [`Localizer::get`], but returns the key itself when nothing matches.
    #[must_use]
    pub fn get_or_key<'a>(&'a self, name: &'a str) -> Cow<'a, str> {
        self.get(name).unwrap_or(Cow::Borrowed(name))
    }
}
