//! Locales embedded in the narration bundles.

use once_cell::sync::Lazy;

use fluent_templates::Loader;

use super::{LOADER, LanguageIdentifier};

static EMBEDDED: Lazy<Vec<(String, LanguageIdentifier)>> = Lazy::new(|| {
    let mut languages: Vec<(String, LanguageIdentifier)> = LOADER
        .locales()
        .map(|identifier| (identifier.to_string(), identifier.clone()))
        .collect();
    languages.sort_unstable_by(|left, right| left.0.cmp(&right.0));
    languages
});

static TAGS: Lazy<Vec<String>> = Lazy::new(|| EMBEDDED.iter().map(|(tag, _)| tag.clone()).collect());

/// Sorted tags of every locale with an embedded narration bundle.
#[must_use]
pub fn available_locales() -> &'static [String] {
    TAGS.as_slice()
}

/// Whether `locale` has an embedded narration bundle.
///
/// Tags are canonicalised before comparison, so `pt-br` matches `pt-BR`.
#[must_use]
pub fn supports_locale(locale: &str) -> bool {
    embedded_language(locale).is_some()
}

/// Resolve `locale` to the identifier of an embedded bundle.
pub(super) fn embedded_language(locale: &str) -> Option<LanguageIdentifier> {
    let canonical = locale.trim().parse::<LanguageIdentifier>().ok()?.to_string();
    EMBEDDED
        .binary_search_by(|(tag, _)| tag.as_str().cmp(canonical.as_str()))
        .ok()
        .and_then(|index| EMBEDDED.get(index))
        .map(|(_, identifier)| identifier.clone())
}
