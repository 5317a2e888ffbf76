//! Lexicon configuration.
//!
//! `gherkit.toml` names the lexicon narration should default to and may
//! define custom lexicons next to the built-in ones:
//!
//! ```toml
//! lexicon = "pirate"
//!
//! [[lexicons]]
//! name = "pirate"
//! given = [["Avast", "AVAST"]]
//! when = [["Arr", "ARR"]]
//! then = [["Yo-ho", "YO-HO"]]
//! and = [["Aye", "AYE"]]
//! scenario = "VOYAGE"
//! ```
//!
//! [`resolve_lexicon`] weighs the configured name against an explicit choice
//! and the [`LEXICON_ENV_VAR`] environment variable, and
//! [`init_default_lexicon`] installs the winner as the process-wide default.

mod global;
mod selection;

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use gherkit_common::lexicon::{
    Lexicon, LexiconError, StepCategory, builtin_names, canonical_builtin_name,
};
use serde::Deserialize;
use thiserror::Error;

pub use global::{LEXICON_ENV_VAR, default_lexicon, init_default_lexicon, set_default_lexicon};
pub use selection::{LexiconSelection, LexiconSource, normalise_name, resolve_lexicon};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Read {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration is not valid TOML for [`GherkitConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A custom lexicon violates the lexicon invariants.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    /// A lexicon name matches neither a built-in nor a custom lexicon.
    #[error("unknown lexicon `{name}`")]
    UnknownLexicon {
        /// Requested name.
        name: String,
    },
    /// Two lexicons share a name.
    #[error("lexicon `{name}` is defined more than once")]
    DuplicateLexicon {
        /// Name defined twice.
        name: String,
    },
}

/// Contents of a `gherkit.toml` file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GherkitConfig {
    /// Name of the lexicon used when nothing more specific is chosen.
    ///
    /// Blank values are treated as absent.
    pub lexicon: Option<String>,
    /// Custom lexicons available by name alongside the built-in ones.
    pub lexicons: Vec<LexiconDefinition>,
}

/// A custom lexicon as written in configuration.
///
/// Each keyword is a `[raw, display]` pair. Omitted labels keep the English
/// defaults.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconDefinition {
    /// Name used to select the lexicon.
    pub name: String,
    /// Locale of the narration frame.
    #[serde(default)]
    pub locale: Option<String>,
    /// Given keywords.
    #[serde(default)]
    pub given: Vec<(String, String)>,
    /// When keywords.
    #[serde(default)]
    pub when: Vec<(String, String)>,
    /// Then keywords.
    #[serde(default)]
    pub then: Vec<(String, String)>,
    /// And keywords.
    #[serde(default)]
    pub and: Vec<(String, String)>,
    /// Background label.
    #[serde(default)]
    pub background: Option<String>,
    /// Scenario label.
    #[serde(default)]
    pub scenario: Option<String>,
    /// Feature label.
    #[serde(default)]
    pub feature: Option<String>,
}

impl LexiconDefinition {
    /// Build and validate the lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] when the definition breaks a lexicon invariant.
    pub fn build(&self) -> Result<Lexicon, LexiconError> {
        let categories = [
            (StepCategory::Given, &self.given),
            (StepCategory::When, &self.when),
            (StepCategory::Then, &self.then),
            (StepCategory::And, &self.and),
        ];
        let mut builder = Lexicon::builder(self.name.trim());

        for (category, keywords) in categories {
            for (raw, display) in keywords {
                builder = builder.keyword(category, raw, display);
            }
        }

        if let Some(locale) = &self.locale {
            builder = builder.locale(locale);
        }
        if let Some(label) = &self.background {
            builder = builder.background_label(label);
        }
        if let Some(label) = &self.scenario {
            builder = builder.scenario_label(label);
        }
        if let Some(label) = &self.feature {
            builder = builder.feature_label(label);
        }

        builder.build()
    }
}

impl GherkitConfig {
    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, and the
    /// errors of [`Self::from_toml_str`] for its contents.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Parse and validate configuration text.
    ///
    /// ```
    /// use gherkit::GherkitConfig;
    ///
    /// let config = GherkitConfig::from_toml_str("lexicon = \"pt-BR\"\n")?;
    /// assert_eq!(config.lexicon_name(), Some("pt-BR"));
    /// # Ok::<(), gherkit::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields,
    /// [`ConfigError::Lexicon`] for an invalid custom lexicon, and
    /// [`ConfigError::DuplicateLexicon`] when a name is taken twice.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every custom lexicon and reject clashing names.
    ///
    /// # Errors
    ///
    /// See [`Self::from_toml_str`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<String> = Vec::with_capacity(self.lexicons.len());

        for definition in &self.lexicons {
            definition.build()?;
            let key = definition.name.trim().to_lowercase();
            if canonical_builtin_name(&key).is_some() || seen.contains(&key) {
                return Err(ConfigError::DuplicateLexicon {
                    name: definition.name.trim().to_owned(),
                });
            }
            seen.push(key);
        }

        Ok(())
    }

    /// Configured default lexicon name, ignoring blank values.
    #[must_use]
    pub fn lexicon_name(&self) -> Option<&str> {
        normalise_name(self.lexicon.as_deref())
    }

    /// Names of every selectable lexicon, built-in ones first.
    #[must_use]
    pub fn lexicon_names(&self) -> Vec<String> {
        builtin_names()
            .iter()
            .map(|name| (*name).to_owned())
            .chain(self.lexicons.iter().map(|definition| definition.name.trim().to_owned()))
            .collect()
    }

    /// Look up a built-in or custom lexicon by name.
    ///
    /// Names are matched case-insensitively; built-in aliases such as `en`
    /// are honoured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLexicon`] when nothing carries `name`,
    /// and [`ConfigError::Lexicon`] when the matching definition is invalid.
    pub fn lexicon_named(&self, name: &str) -> Result<Lexicon, ConfigError> {
        if let Some(lexicon) = Lexicon::builtin(name) {
            return Ok(lexicon.clone());
        }

        let wanted = name.trim();
        self.lexicons
            .iter()
            .find(|definition| definition.name.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownLexicon {
                name: wanted.to_owned(),
            })?
            .build()
            .map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests;
