//! Localisation of the narration frame.
//!
//! Step keywords come from the [`Lexicon`](crate::lexicon::Lexicon); the
//! surrounding frame (the `TEST RESULT` status line and its glyphs) comes
//! from Fluent resources embedded from `locales/` at compile time, so test
//! binaries never touch the filesystem to narrate a step.
//!
//! [`Localiser`] wraps the embedded loader and records whether the fallback
//! bundle was used. [`safe_resolve_status_messages`] turns a lookup failure
//! into the deterministic English frame after logging it.

use fluent_templates::static_loader;
use unic_langid::langid;

pub(crate) use fluent_templates::loader::LanguageIdentifier;

const FALLBACK_LITERAL: &str = "en-GB";

static_loader! {
    pub(crate) static LOADER = {
        locales: "../locales",
        fallback_language: "en-GB",
        // Narration messages carry no placeables, so no isolating marks appear.
    };
}

/// Locale used when a lexicon has no locale or an unsupported one.
pub const FALLBACK_LOCALE: &str = FALLBACK_LITERAL;
pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-GB");

mod loader;
mod locales;
mod narration;
pub mod testing;

pub use loader::{BundleLookup, I18nError, Localiser};
pub use locales::{available_locales, supports_locale};
pub use narration::{
    STATUS_MESSAGE_KEY, StatusMessages, StepStatus, safe_resolve_status_messages,
    status_messages_for,
};
