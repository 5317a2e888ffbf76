//! Validating builder for custom lexicons.

use super::{Keyword, Lexicon, LexiconError, StepCategory};

const DEFAULT_FEATURE: &str = "FEATURE";
const DEFAULT_SCENARIO: &str = "SCENARIO";
const DEFAULT_BACKGROUND: &str = "BACKGROUND";

/// Accumulates keywords and labels before producing a validated [`Lexicon`].
///
/// Labels default to the English `FEATURE`, `SCENARIO`, and `BACKGROUND`
/// forms; every step category must receive at least one keyword.
#[derive(Clone, Debug)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            lexicon: Lexicon {
                name: name.into(),
                locale: None,
                given: Vec::new(),
                when: Vec::new(),
                then: Vec::new(),
                and: Vec::new(),
                feature: DEFAULT_FEATURE.to_owned(),
                scenario: DEFAULT_SCENARIO.to_owned(),
                background: DEFAULT_BACKGROUND.to_owned(),
            },
        }
    }

    /// Attach the locale whose Fluent bundle localises the narration frame.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.lexicon.locale = Some(locale.into());
        self
    }

    /// Add a keyword to `category`.
    #[must_use]
    pub fn keyword(
        mut self,
        category: StepCategory,
        raw: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        let keyword = Keyword::new(raw, display);
        match category {
            StepCategory::Given => self.lexicon.given.push(keyword),
            StepCategory::When => self.lexicon.when.push(keyword),
            StepCategory::Then => self.lexicon.then.push(keyword),
            StepCategory::And => self.lexicon.and.push(keyword),
        }
        self
    }

    /// Add a `Given` keyword.
    #[must_use]
    pub fn given(self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.keyword(StepCategory::Given, raw, display)
    }

    /// Add a `When` keyword.
    #[must_use]
    pub fn when(self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.keyword(StepCategory::When, raw, display)
    }

    /// Add a `Then` keyword.
    #[must_use]
    pub fn then(self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.keyword(StepCategory::Then, raw, display)
    }

    /// Add an `And` keyword.
    #[must_use]
    pub fn and(self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.keyword(StepCategory::And, raw, display)
    }

    /// Override the feature label.
    #[must_use]
    pub fn feature_label(mut self, label: impl Into<String>) -> Self {
        self.lexicon.feature = label.into();
        self
    }

    /// Override the scenario label.
    #[must_use]
    pub fn scenario_label(mut self, label: impl Into<String>) -> Self {
        self.lexicon.scenario = label.into();
        self
    }

    /// Override the background label.
    #[must_use]
    pub fn background_label(mut self, label: impl Into<String>) -> Self {
        self.lexicon.background = label.into();
        self
    }

    /// Validate the accumulated table.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] when the name is blank, a category is empty,
    /// a raw keyword is blank, or one raw keyword is claimed by two
    /// categories.
    pub fn build(self) -> Result<Lexicon, LexiconError> {
        self.lexicon.validate()?;
        Ok(self.lexicon)
    }
}
