//! Shared narration infrastructure for gherkit: keyword lexicons, the
//! single-pass step highlighter, and localisation of the narration frame.

pub mod highlight;
pub mod i18n;
pub mod lexicon;

pub use highlight::{LABEL_MARKER, STEP_MARKER, highlight};
pub use i18n::{
    BundleLookup, FALLBACK_LOCALE, I18nError, Localiser, StatusMessages, StepStatus,
    available_locales, safe_resolve_status_messages, status_messages_for, supports_locale,
};
pub use lexicon::{
    Keyword, Label, Lexicon, LexiconBuilder, LexiconError, StepCategory, builtin_names,
    canonical_builtin_name,
};
