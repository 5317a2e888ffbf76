//! Composition of the narration block for one step.
//!
//! A block opens with the localised status line, followed by the feature and
//! scenario (or background) labels and the decorated steps:
//!
//! ```text
//! TEST RESULT: 🔴 FAIL
//! ⤷ FEATURE Shopping cart
//!   ⤷ SCENARIO adds_items
//!     | GIVEN ↘ an empty cart
//! ```

use gherkit_common::highlight::highlight;
use gherkit_common::i18n::{StepStatus, status_messages_for};
use gherkit_common::lexicon::{Label, Lexicon};

use crate::context::TestContext;

/// Everything known about a step once it has run.
#[derive(Clone, Copy, Debug)]
pub struct NarratedStep<'a> {
    /// Raw step text.
    pub text: &'a str,
    /// Name of the function backing the step, if known.
    pub method_name: Option<&'a str>,
    /// Whether the step passed.
    pub status: StepStatus,
    /// Whether the step belongs to a background.
    pub is_background: bool,
    /// Vocabulary used for decoration.
    pub lexicon: &'a Lexicon,
}

/// Whether `text` carries anything worth narrating.
#[must_use]
pub fn has_steps(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Render the narration block for `step`.
///
/// The scenario label falls back from the context's display name to the
/// step's method name and finally to the bare status glyph. Blank step text
/// renders as an empty string.
///
/// ```
/// use gherkit::context::TestContext;
/// use gherkit::narration::{NarratedStep, compose};
/// use gherkit::{Lexicon, StepStatus};
///
/// let step = NarratedStep {
///     text: "Given a cart",
///     method_name: Some("adds_items"),
///     status: StepStatus::Passed,
///     is_background: false,
///     lexicon: Lexicon::english(),
/// };
///
/// assert_eq!(
///     compose(&step, &TestContext::default()),
///     "TEST RESULT: 🟢 SUCCESS\n  ⤷ SCENARIO adds_items\n    | GIVEN ↘ a cart",
/// );
/// ```
#[must_use]
pub fn compose(step: &NarratedStep<'_>, context: &TestContext) -> String {
    if !has_steps(step.text) {
        return String::new();
    }

    let messages = status_messages_for(step.lexicon.locale());
    let mut script = String::new();

    if let Some(feature) = context.feature() {
        push_label_line(&mut script, Label::Feature, feature);
    }

    let group = if step.is_background {
        Label::Background
    } else {
        Label::Scenario
    };
    let name = context
        .display_name()
        .or(step.method_name)
        .unwrap_or_else(|| messages.glyph(step.status));
    push_label_line(&mut script, group, name);

    script.push_str(step.text.trim_start_matches(['\r', '\n']).trim_end());

    let mut narration = messages.line(step.status);
    narration.push('\n');
    narration.push_str(&highlight(&script, step.lexicon));
    narration
}

fn push_label_line(script: &mut String, label: Label, value: &str) {
    script.push_str(label.token());
    script.push(' ');
    // Names spanning lines would otherwise leak into the step section.
    script.extend(value.chars().map(|character| match character {
        '\r' | '\n' => ' ',
        other => other,
    }));
    script.push('\n');
}
