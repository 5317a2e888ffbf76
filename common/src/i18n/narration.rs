//! Status line vocabulary for narrated steps.

use std::fmt;

use log::debug;

use super::{BundleLookup, I18nError, Localiser};

/// Fluent message holding the status heading and its outcome attributes.
pub const STATUS_MESSAGE_KEY: &str = "narration-status";

/// Whether a narrated step passed or failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepStatus {
    /// The step completed normally.
    Passed,
    /// The step returned an error or panicked.
    Failed,
}

impl StepStatus {
    /// Map a failure flag onto a status.
    #[must_use]
    pub const fn from_failed(failed: bool) -> Self {
        if failed { Self::Failed } else { Self::Passed }
    }

    /// Whether the status records a failure.
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    const fn attribute(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }

    const fn glyph_attribute(self) -> &'static str {
        match self {
            Self::Passed => "passed-glyph",
            Self::Failed => "failed-glyph",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.attribute())
    }
}

/// Localised strings that frame a narrated step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessages {
    heading: String,
    passed: String,
    failed: String,
    passed_glyph: String,
    failed_glyph: String,
}

impl StatusMessages {
    /// Resolve every status string through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the first [`I18nError`] raised by the lookup.
    pub fn resolve(lookup: &impl BundleLookup) -> Result<Self, I18nError> {
        let attribute = |status: StepStatus| lookup.attribute(STATUS_MESSAGE_KEY, status.attribute());
        let glyph = |status: StepStatus| {
            lookup.attribute(STATUS_MESSAGE_KEY, status.glyph_attribute())
        };

        Ok(Self {
            heading: lookup.message(STATUS_MESSAGE_KEY)?,
            passed: attribute(StepStatus::Passed)?,
            failed: attribute(StepStatus::Failed)?,
            passed_glyph: glyph(StepStatus::Passed)?,
            failed_glyph: glyph(StepStatus::Failed)?,
        })
    }

    /// Built-in English frame used when the bundles cannot serve a lookup.
    #[must_use]
    pub fn english() -> Self {
        Self {
            heading: "TEST RESULT".to_owned(),
            passed: "🟢 SUCCESS".to_owned(),
            failed: "🔴 FAIL".to_owned(),
            passed_glyph: "🟢".to_owned(),
            failed_glyph: "🔴".to_owned(),
        }
    }

    /// The full status line, e.g. `TEST RESULT: 🟢 SUCCESS`.
    ///
    /// ```
    /// use gherkit_common::i18n::{StatusMessages, StepStatus};
    ///
    /// let messages = StatusMessages::english();
    /// assert_eq!(messages.line(StepStatus::Failed), "TEST RESULT: 🔴 FAIL");
    /// ```
    #[must_use]
    pub fn line(&self, status: StepStatus) -> String {
        let outcome = match status {
            StepStatus::Passed => &self.passed,
            StepStatus::Failed => &self.failed,
        };
        format!("{}: {outcome}", self.heading)
    }

    /// The bare status glyph used when a scenario has no name.
    #[must_use]
    pub fn glyph(&self, status: StepStatus) -> &str {
        match status {
            StepStatus::Passed => &self.passed_glyph,
            StepStatus::Failed => &self.failed_glyph,
        }
    }
}

/// Resolve the status frame, falling back to English on failure.
///
/// Lookup failures are logged at debug level under `target` and never
/// propagate: a narration problem must not fail the step it narrates.
#[must_use]
pub fn safe_resolve_status_messages(lookup: &impl BundleLookup, target: &str) -> StatusMessages {
    match StatusMessages::resolve(lookup) {
        Ok(messages) => messages,
        Err(error) => {
            debug!(
                target: target,
                "localisation error in locale `{}`: {error}; using the English status line",
                lookup.locale(),
            );
            StatusMessages::english()
        }
    }
}

/// Resolve the status frame for an optional lexicon locale.
#[must_use]
pub fn status_messages_for(locale: Option<&str>) -> StatusMessages {
    let localiser = Localiser::new(locale);
    if localiser.used_fallback() {
        if let Some(requested) = locale {
            debug!(
                target: "gherkit::i18n",
                "no narration bundle for `{requested}`; using {}",
                localiser.locale(),
            );
        }
    }
    safe_resolve_status_messages(&localiser, "gherkit::i18n")
}
