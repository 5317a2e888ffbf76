//! Keyword lexicons mapping raw Gherkin tokens to decorated display forms.
//!
//! A [`Lexicon`] groups the step keywords of one locale or style into the
//! Given/When/Then/And categories and names the labels used for features,
//! scenarios, and backgrounds. Lexicons are immutable once built; the
//! [`LexiconBuilder`] validates them eagerly so the highlighter never sees an
//! empty category.
//!
//! Three lexicons ship with the crate and can be looked up by name through
//! [`Lexicon::builtin`]: `default` (English), `pt-BR`, and `emoji`.

use std::fmt;

use thiserror::Error;

mod builder;
mod builtin;

pub use builder::LexiconBuilder;
pub use builtin::{builtin_names, canonical_builtin_name};

/// Step keyword categories recognised by the highlighter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepCategory {
    /// Preconditions: `Given`.
    Given,
    /// Actions: `When`.
    When,
    /// Expectations: `Then`.
    Then,
    /// Continuations of the previous step: `And`.
    And,
}

impl StepCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 4] = [Self::Given, Self::When, Self::Then, Self::And];

    /// Returns the English name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
        }
    }
}

impl fmt::Display for StepCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Narration labels that introduce a feature, scenario, or background.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    /// The enclosing feature description.
    Feature,
    /// An individual test case.
    Scenario,
    /// Shared setup executed before scenarios.
    Background,
}

impl Label {
    /// Every label in declaration order.
    pub const ALL: [Self; 3] = [Self::Feature, Self::Scenario, Self::Background];

    /// Raw token recognised in narration text.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Scenario => "Scenario",
            Self::Background => "Background",
        }
    }
}

/// A raw keyword token and the form it is displayed as.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Keyword {
    raw: String,
    display: String,
}

impl Keyword {
    /// Pair a raw token with its display form.
    #[must_use]
    pub fn new(raw: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            display: display.into(),
        }
    }

    /// The token as written in step text, e.g. `Given`.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn ends_in_word(&self) -> bool {
        self.raw.ends_with(char::is_alphanumeric)
    }

    /// The decorated form, e.g. `GIVEN`.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    fn width(&self) -> usize {
        self.display.chars().count()
    }
}

/// Error raised when a lexicon violates its invariants.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// The lexicon name was blank.
    #[error("lexicon name must not be blank")]
    EmptyName,
    /// A keyword category has no entries.
    #[error("lexicon `{lexicon}` declares no {category} keywords")]
    EmptyCategory {
        /// Name of the offending lexicon.
        lexicon: String,
        /// Category without keywords.
        category: StepCategory,
    },
    /// A keyword has a blank raw token.
    #[error("lexicon `{lexicon}` declares a blank {category} keyword")]
    EmptyKeyword {
        /// Name of the offending lexicon.
        lexicon: String,
        /// Category holding the blank keyword.
        category: StepCategory,
    },
    /// The same raw token is claimed by two categories.
    #[error("lexicon `{lexicon}` maps `{keyword}` to both {first} and {second}")]
    DuplicateKeyword {
        /// Name of the offending lexicon.
        lexicon: String,
        /// The ambiguous raw token.
        keyword: String,
        /// Category that declared the token first.
        first: StepCategory,
        /// Category that declared it again.
        second: StepCategory,
    },
}

/// Immutable keyword table for one locale or narration style.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lexicon {
    name: String,
    locale: Option<String>,
    given: Vec<Keyword>,
    when: Vec<Keyword>,
    then: Vec<Keyword>,
    and: Vec<Keyword>,
    feature: String,
    scenario: String,
    background: String,
}

impl Lexicon {
    /// Start building a custom lexicon called `name`.
    ///
    /// ```
    /// use gherkit_common::lexicon::{Lexicon, StepCategory};
    ///
    /// let pirate = Lexicon::builder("pirate")
    ///     .given("Avast", "AVAST")
    ///     .when("Arr", "ARR")
    ///     .then("Yo-ho", "YO-HO")
    ///     .and("Aye", "AYE")
    ///     .build()
    ///     .expect("pirate lexicon is valid");
    ///
    /// assert_eq!(pirate.keywords(StepCategory::Given)[0].display(), "AVAST");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LexiconBuilder {
        LexiconBuilder::new(name)
    }

    /// Look up a built-in lexicon by name or alias.
    ///
    /// ```
    /// use gherkit_common::lexicon::Lexicon;
    ///
    /// assert_eq!(Lexicon::builtin("pt-br").map(Lexicon::name), Some("pt-BR"));
    /// assert!(Lexicon::builtin("klingon").is_none());
    /// ```
    #[must_use]
    pub fn builtin(name: &str) -> Option<&'static Self> {
        builtin::lookup(name)
    }

    /// The English lexicon used when nothing else is configured.
    #[must_use]
    pub fn english() -> &'static Self {
        &builtin::ENGLISH
    }

    /// The Brazilian Portuguese lexicon.
    #[must_use]
    pub fn portuguese() -> &'static Self {
        &builtin::PORTUGUESE
    }

    /// The pictographic lexicon.
    #[must_use]
    pub fn emoji() -> &'static Self {
        &builtin::EMOJI
    }

    /// Identifier used to select this lexicon.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale tag used to localise the narration frame, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Keywords declared for `category`.
    #[must_use]
    pub fn keywords(&self, category: StepCategory) -> &[Keyword] {
        match category {
            StepCategory::Given => &self.given,
            StepCategory::When => &self.when,
            StepCategory::Then => &self.then,
            StepCategory::And => &self.and,
        }
    }

    /// Display text for `label`.
    #[must_use]
    pub fn label(&self, label: Label) -> &str {
        match label {
            Label::Feature => &self.feature,
            Label::Scenario => &self.scenario,
            Label::Background => &self.background,
        }
    }

    /// Iterate over every step keyword with its category.
    pub fn step_keywords(&self) -> impl Iterator<Item = (StepCategory, &Keyword)> {
        StepCategory::ALL.into_iter().flat_map(move |category| {
            self.keywords(category)
                .iter()
                .map(move |keyword| (category, keyword))
        })
    }

    /// Column width that aligns every step display form.
    ///
    /// The width is the longest display form plus one, so `ENTÃO` and `E`
    /// line up on their directional markers.
    #[must_use]
    pub fn padding_width(&self) -> usize {
        self.step_keywords()
            .map(|(_, keyword)| keyword.width())
            .max()
            .unwrap_or_default()
            + 1
    }

    /// Find the longest step keyword that opens `line`.
    ///
    /// A keyword ending in a word character only matches when the character
    /// after it is not alphanumeric, so `E` does not claim `Eles`. Keywords
    /// that carry their own separator, such as `"Given "` or `"* "`, match on
    /// the prefix alone. Returns the keyword and the remainder of the line
    /// following it.
    #[must_use]
    pub fn match_step<'line>(&self, line: &'line str) -> Option<(&Keyword, &'line str)> {
        self.step_keywords()
            .filter_map(|(_, keyword)| {
                line.strip_prefix(keyword.raw())
                    .filter(|rest| !keyword.ends_in_word() || ends_token(rest))
                    .map(|rest| (keyword, rest))
            })
            .max_by_key(|(keyword, _)| keyword.raw().len())
    }

    pub(crate) fn validate(&self) -> Result<(), LexiconError> {
        if self.name.trim().is_empty() {
            return Err(LexiconError::EmptyName);
        }

        let mut seen: Vec<(&str, StepCategory)> = Vec::new();
        for category in StepCategory::ALL {
            let keywords = self.keywords(category);
            if keywords.is_empty() {
                return Err(LexiconError::EmptyCategory {
                    lexicon: self.name.clone(),
                    category,
                });
            }

            for keyword in keywords {
                if keyword.raw().trim().is_empty() {
                    return Err(LexiconError::EmptyKeyword {
                        lexicon: self.name.clone(),
                        category,
                    });
                }

                if let Some((_, first)) = seen.iter().find(|(raw, _)| *raw == keyword.raw()) {
                    if *first != category {
                        return Err(LexiconError::DuplicateKeyword {
                            lexicon: self.name.clone(),
                            keyword: keyword.raw().to_owned(),
                            first: *first,
                            second: category,
                        });
                    }
                }
                seen.push((keyword.raw(), category));
            }
        }

        Ok(())
    }
}

/// Whether `rest` starts at a token boundary.
pub(crate) fn ends_token(rest: &str) -> bool {
    !rest.starts_with(char::is_alphanumeric)
}

#[cfg(test)]
mod tests;
