use fluent_templates::Loader;
use thiserror::Error;

use super::locales::embedded_language;
use super::{FALLBACK_LANGUAGE, FALLBACK_LOCALE, LOADER, LanguageIdentifier};

/// Error raised when localisation data cannot satisfy a lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// The requested message or attribute is missing for the resolved locale.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Message key, with the attribute suffix when one was requested.
        key: String,
        /// Locale the lookup ran against.
        locale: String,
    },
}

/// Lookup seam used by narration helpers, so tests can inject failures.
pub trait BundleLookup {
    /// Resolved locale tag.
    fn locale(&self) -> &str;

    /// Resolve the message value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when `key` has no value.
    fn message(&self, key: &str) -> Result<String, I18nError>;

    /// Resolve the `key.attribute` message.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when the attribute is absent.
    fn attribute(&self, key: &str, attribute: &str) -> Result<String, I18nError>;
}

/// Resolves narration messages for one locale.
///
/// Unknown or absent locales fall back to [`FALLBACK_LOCALE`]
/// and record that they did so.
#[derive(Clone, Debug)]
pub struct Localiser {
    language: LanguageIdentifier,
    tag: String,
    fallback_used: bool,
}

impl Localiser {
    /// Create a localiser for `locale`.
    ///
    /// ```
    /// use gherkit_common::i18n::Localiser;
    ///
    /// let portuguese = Localiser::new(Some("pt-BR"));
    /// assert_eq!(portuguese.locale(), "pt-BR");
    /// assert!(!portuguese.used_fallback());
    ///
    /// let unknown = Localiser::new(Some("zz"));
    /// assert_eq!(unknown.locale(), "en-GB");
    /// assert!(unknown.used_fallback());
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        locale
            .and_then(embedded_language)
            .map_or_else(Self::fallback, |language| Self {
                tag: language.to_string(),
                language,
                fallback_used: false,
            })
    }

    /// Return the resolved language identifier.
    #[must_use]
    pub const fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Return the resolved locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.tag
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    fn lookup(&self, key: String) -> Result<String, I18nError> {
        LOADER
            .try_lookup(&self.language, key.as_str())
            .ok_or_else(|| I18nError::MissingMessage {
                key,
                locale: self.tag.clone(),
            })
    }

    fn fallback() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.clone(),
            tag: FALLBACK_LOCALE.to_owned(),
            fallback_used: true,
        }
    }
}

impl BundleLookup for Localiser {
    fn locale(&self) -> &str {
        &self.tag
    }

    fn message(&self, key: &str) -> Result<String, I18nError> {
        self.lookup(key.to_owned())
    }

    fn attribute(&self, key: &str, attribute: &str) -> Result<String, I18nError> {
        self.lookup(format!("{key}.{attribute}"))
    }
}
