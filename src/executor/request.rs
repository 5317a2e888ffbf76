use std::any::type_name;
use std::convert::Infallible;
use std::sync::Arc;

use gherkit_common::lexicon::Lexicon;

/// Values a step may return.
///
/// `()` always passes; `Result<(), E>` fails with its error.
pub trait StepReturn {
    /// Error handed back to the caller when the step fails.
    type Error;

    /// Normalise the return value.
    ///
    /// # Errors
    ///
    /// Returns the step's own error unchanged.
    fn into_result(self) -> Result<(), Self::Error>;
}

impl StepReturn for () {
    type Error = Infallible;

    fn into_result(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<E> StepReturn for Result<(), E> {
    type Error = E;

    fn into_result(self) -> Self {
        self
    }
}

/// Step text plus per-call options.
///
/// ```
/// use gherkit::StepRequest;
///
/// let request = StepRequest::new("Given a cart")
///     .method_name("adds_items")
///     .background(true);
/// assert_eq!(request.text(), "Given a cart");
/// assert!(request.is_background());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StepRequest {
    text: String,
    method_name: Option<String>,
    is_background: bool,
    lexicon: Option<Arc<Lexicon>>,
}

impl StepRequest {
    /// Request narration for `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Name the function backing the step.
    #[must_use]
    pub fn method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }

    /// Mark the step as part of a background.
    #[must_use]
    pub const fn background(mut self, is_background: bool) -> Self {
        self.is_background = is_background;
        self
    }

    /// Decorate this step with `lexicon` instead of the default.
    #[must_use]
    pub fn lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = Some(lexicon.into());
        self
    }

    /// Raw step text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the step belongs to a background.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.is_background
    }

    pub(super) fn into_parts(self) -> (String, Option<String>, bool, Option<Arc<Lexicon>>) {
        (self.text, self.method_name, self.is_background, self.lexicon)
    }
}

impl From<&str> for StepRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StepRequest {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Name of the function item `F`, when `F` is one.
///
/// Closures and function pointers have no usable name.
pub(super) fn method_name_of<F>() -> Option<String> {
    let full = type_name::<F>();
    if full.contains("{{closure}}") || full.contains('(') {
        return None;
    }

    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::")
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pays_the_invoice() {}

    fn generic_step<T>() {}

    fn name_of<F>(_step: &F) -> Option<String> {
        method_name_of::<F>()
    }

    #[rstest]
    fn function_items_are_named() {
        assert_eq!(
            name_of(&pays_the_invoice).as_deref(),
            Some("pays_the_invoice")
        );
        assert_eq!(
            name_of(&generic_step::<u8>).as_deref(),
            Some("generic_step")
        );
    }

    #[rstest]
    fn closures_and_pointers_are_anonymous() {
        let closure = || ();
        let pointer: fn() = pays_the_invoice;

        assert_eq!(name_of(&closure), None);
        assert_eq!(name_of(&pointer), None);
    }

    #[rstest]
    fn unit_and_results_normalise() {
        assert_eq!(().into_result(), Ok::<(), Infallible>(()));
        assert_eq!(Err::<(), _>("boom").into_result(), Err("boom"));
    }

    #[rstest]
    fn builder_sets_every_option() {
        let request = StepRequest::from("Given a")
            .method_name("named")
            .background(true)
            .lexicon(Lexicon::emoji().clone());

        let (text, method_name, is_background, lexicon) = request.into_parts();

        assert_eq!(text, "Given a");
        assert_eq!(method_name.as_deref(), Some("named"));
        assert!(is_background);
        assert_eq!(lexicon.as_deref().map(Lexicon::name), Some("emoji"));
    }
}
