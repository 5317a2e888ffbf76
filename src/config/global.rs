//! The process-wide default lexicon.
//!
//! The default is start-up configuration: set it once while the suite
//! initialises, before steps run concurrently. Later changes are visible to
//! subsequent steps but carry no ordering guarantee against steps already in
//! flight.

use std::env;
use std::sync::{Arc, PoisonError, RwLock};

use gherkit_common::lexicon::Lexicon;
use once_cell::sync::Lazy;

use super::{GherkitConfig, LexiconSelection, resolve_lexicon};

/// Environment variable naming the default lexicon.
pub const LEXICON_ENV_VAR: &str = "GHERKIT_LEXICON";

static DEFAULT_LEXICON: Lazy<RwLock<Arc<Lexicon>>> =
    Lazy::new(|| RwLock::new(Arc::new(Lexicon::english().clone())));

/// The lexicon used by steps without an override.
#[must_use]
pub fn default_lexicon() -> Arc<Lexicon> {
    let guard = DEFAULT_LEXICON
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the process-wide default lexicon.
///
/// ```no_run
/// use gherkit::{Lexicon, default_lexicon, set_default_lexicon};
///
/// set_default_lexicon(Lexicon::portuguese().clone());
/// assert_eq!(default_lexicon().name(), "pt-BR");
/// ```
pub fn set_default_lexicon(lexicon: Lexicon) {
    let mut guard = DEFAULT_LEXICON
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(lexicon);
}

/// Resolve the default lexicon from the environment and `config`, then
/// install it.
///
/// Reads [`LEXICON_ENV_VAR`]; see
/// [`resolve_lexicon`](super::resolve_lexicon) for the priority order.
pub fn init_default_lexicon(config: &GherkitConfig) -> LexiconSelection {
    let selection = resolve_lexicon(None, env::var(LEXICON_ENV_VAR).ok(), config);
    selection.log_outcome("gherkit::config");
    set_default_lexicon(selection.lexicon().clone());
    selection
}
