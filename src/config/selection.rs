use std::fmt;

use gherkit_common::lexicon::Lexicon;
use log::{debug, warn};

use super::{GherkitConfig, LEXICON_ENV_VAR};

/// Where a resolved lexicon came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexiconSource {
    /// Lexicon named explicitly by the caller.
    ExplicitArgument,
    /// Lexicon named by the `GHERKIT_LEXICON` environment variable.
    EnvironmentVariable,
    /// Lexicon named in `gherkit.toml`.
    Configuration,
    /// The built-in `default` lexicon.
    Fallback,
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("explicit lexicon"),
            Self::EnvironmentVariable => formatter.write_str(LEXICON_ENV_VAR),
            Self::Configuration => formatter.write_str("configured lexicon"),
            Self::Fallback => formatter.write_str("fallback lexicon"),
        }
    }
}

/// Outcome of lexicon resolution, with its provenance.
#[derive(Clone, Debug)]
pub struct LexiconSelection {
    lexicon: Lexicon,
    source: LexiconSource,
    requested: Option<String>,
}

impl LexiconSelection {
    const fn new(lexicon: Lexicon, source: LexiconSource, requested: Option<String>) -> Self {
        Self {
            lexicon,
            source,
            requested,
        }
    }

    /// Returns the effective lexicon source.
    #[must_use]
    pub const fn source(&self) -> LexiconSource {
        self.source
    }

    /// Returns the name requested by the winning source, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Returns the resolved lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Consumes the selection, yielding the lexicon.
    #[must_use]
    pub fn into_lexicon(self) -> Lexicon {
        self.lexicon
    }

    /// Emit a debug log summarising the resolution.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.lexicon.name(),
        );
    }
}

fn try_resolve_candidate(
    config: &GherkitConfig,
    source: LexiconSource,
    raw: Option<&str>,
) -> Option<LexiconSelection> {
    let candidate = normalise_name(raw)?;

    match config.lexicon_named(candidate) {
        Ok(lexicon) => Some(LexiconSelection::new(
            lexicon,
            source,
            Some(candidate.to_owned()),
        )),
        Err(error) => {
            warn!(
                target: "gherkit::config",
                "skipping {source} `{candidate}`: {error}",
            );
            None
        }
    }
}

/// Resolve the lexicon from explicit, environment, and configuration choices.
///
/// The resolver considers candidates in the following order:
///
/// 1. The name supplied by the caller.
/// 2. The `GHERKIT_LEXICON` environment variable.
/// 3. The `lexicon` key of the configuration.
/// 4. The built-in `default` lexicon.
///
/// Blank names are ignored and unknown names are skipped with a warning.
///
/// ```
/// use gherkit::{GherkitConfig, LexiconSource, resolve_lexicon};
///
/// let selection = resolve_lexicon(Some("pirate"), Some("pt".into()), &GherkitConfig::default());
/// assert_eq!(selection.source(), LexiconSource::EnvironmentVariable);
/// assert_eq!(selection.lexicon().name(), "pt-BR");
/// ```
#[must_use]
pub fn resolve_lexicon(
    explicit: Option<&str>,
    environment: Option<String>,
    config: &GherkitConfig,
) -> LexiconSelection {
    let candidates = [
        (LexiconSource::ExplicitArgument, explicit),
        (LexiconSource::EnvironmentVariable, environment.as_deref()),
        (LexiconSource::Configuration, config.lexicon_name()),
    ];

    candidates
        .into_iter()
        .find_map(|(source, raw)| try_resolve_candidate(config, source, raw))
        .unwrap_or_else(|| {
            LexiconSelection::new(Lexicon::english().clone(), LexiconSource::Fallback, None)
        })
}

/// Trim whitespace and discard empty lexicon names.
#[must_use]
pub fn normalise_name(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}
