//! Test doubles for the localisation seam.

use std::borrow::Cow;
use std::collections::HashMap;

use super::{BundleLookup, I18nError};

/// Lookup that reports every message as missing.
///
/// Exercises the English fallback without relying on the embedded bundles.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailingLookup {
    locale: Cow<'static, str>,
}

impl FailingLookup {
    /// Construct a failing lookup that claims to serve `locale`.
    #[must_use]
    pub fn new(locale: impl Into<Cow<'static, str>>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    fn missing(&self, key: String) -> I18nError {
        I18nError::MissingMessage {
            key,
            locale: self.locale.clone().into_owned(),
        }
    }
}

impl BundleLookup for FailingLookup {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self, key: &str) -> Result<String, I18nError> {
        Err(self.missing(key.to_owned()))
    }

    fn attribute(&self, key: &str, attribute: &str) -> Result<String, I18nError> {
        Err(self.missing(format!("{key}.{attribute}")))
    }
}

/// Lookup backed by an in-memory table of `key` or `key.attribute` entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TableLookup {
    entries: HashMap<String, String>,
}

impl TableLookup {
    /// Add or replace an entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    fn get(&self, key: String) -> Result<String, I18nError> {
        self.entries
            .get(&key)
            .cloned()
            .ok_or(I18nError::MissingMessage {
                key,
                locale: "table".to_owned(),
            })
    }
}

impl BundleLookup for TableLookup {
    fn locale(&self) -> &str {
        "table"
    }

    fn message(&self, key: &str) -> Result<String, I18nError> {
        self.get(key.to_owned())
    }

    fn attribute(&self, key: &str, attribute: &str) -> Result<String, I18nError> {
        self.get(format!("{key}.{attribute}"))
    }
}
