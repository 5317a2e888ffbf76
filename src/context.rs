//! Lookup of the running test's metadata.
//!
//! Test runners expose the current test in different ways, so the lookup is
//! an injected capability: a [`TestContextProvider`] reports what it knows and
//! [`resolve_context`] reduces that report to the two values narration needs.
//! Every failure along the way resolves to an empty [`TestContext`].

use std::sync::Arc;
use std::thread;

use crate::output::OutputSink;

/// Label key that marks the description of the enclosing feature.
pub const FEATURE_LABEL_KEY: &str = "Feature";

/// A key/value label attached to the group enclosing a test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupLabel {
    key: String,
    value: String,
}

impl GroupLabel {
    /// Create a label.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `Feature` label.
    #[must_use]
    pub fn feature(description: impl Into<String>) -> Self {
        Self::new(FEATURE_LABEL_KEY, description)
    }

    /// Label key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Label value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Raw metadata reported by a provider.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TestMetadata {
    /// Display name of the running test, when the runner knows one.
    pub display_name: Option<String>,
    /// Labels of the enclosing group, in the provider's declaration order.
    pub labels: Vec<GroupLabel>,
}

/// Access to the runner's view of the current test.
#[cfg_attr(test, mockall::automock)]
pub trait TestContextProvider: Send + Sync {
    /// Report the current test, or `None` when the runner cannot say.
    fn try_resolve(&self) -> Option<TestMetadata>;

    /// The per-test log channel, when the runner keeps one.
    fn test_log(&self) -> Option<Arc<dyn OutputSink>> {
        None
    }
}

/// Resolved metadata used to label narration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TestContext {
    display_name: Option<String>,
    feature: Option<String>,
}

impl TestContext {
    /// Create a context from already known values.
    #[must_use]
    pub const fn new(display_name: Option<String>, feature: Option<String>) -> Self {
        Self {
            display_name,
            feature,
        }
    }

    /// Display name of the running test.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Description of the enclosing feature.
    #[must_use]
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// Whether neither value could be resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.feature.is_none()
    }
}

impl From<TestMetadata> for TestContext {
    fn from(metadata: TestMetadata) -> Self {
        // Several Feature labels are ambiguous; the first one reported wins.
        let feature = metadata
            .labels
            .into_iter()
            .find(|label| label.key == FEATURE_LABEL_KEY)
            .map(|label| label.value);

        Self {
            display_name: metadata.display_name,
            feature,
        }
    }
}

/// Resolve the context of the running test.
///
/// ```
/// use gherkit::context::{GroupLabel, StaticContext, resolve_context};
///
/// assert!(resolve_context(None).is_empty());
///
/// let provider = StaticContext::new()
///     .with_display_name("adds_items")
///     .with_label(GroupLabel::feature("Shopping cart"));
/// let context = resolve_context(Some(&provider));
/// assert_eq!(context.display_name(), Some("adds_items"));
/// assert_eq!(context.feature(), Some("Shopping cart"));
/// ```
#[must_use]
pub fn resolve_context(provider: Option<&dyn TestContextProvider>) -> TestContext {
    provider
        .and_then(|provider| provider.try_resolve())
        .map(TestContext::from)
        .unwrap_or_default()
}

/// Provider with values fixed at construction.
#[derive(Clone, Default)]
pub struct StaticContext {
    metadata: TestMetadata,
    log: Option<Arc<dyn OutputSink>>,
}

impl StaticContext {
    /// Create a provider that knows nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `name` as the running test.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.display_name = Some(name.into());
        self
    }

    /// Attach a label to the enclosing group.
    #[must_use]
    pub fn with_label(mut self, label: GroupLabel) -> Self {
        self.metadata.labels.push(label);
        self
    }

    /// Route narration to `log` as the per-test log channel.
    #[must_use]
    pub fn with_test_log(mut self, log: Arc<dyn OutputSink>) -> Self {
        self.log = Some(log);
        self
    }
}

impl TestContextProvider for StaticContext {
    fn try_resolve(&self) -> Option<TestMetadata> {
        Some(self.metadata.clone())
    }

    fn test_log(&self) -> Option<Arc<dyn OutputSink>> {
        self.log.clone()
    }
}

/// Provider for the standard libtest harness.
///
/// libtest runs each test on a thread named after the test path, for example
/// `cart::tests::adds_items`. The last path segment becomes the display name
/// and the module path, when there is one, becomes the feature. The main
/// thread, unnamed threads, and threads whose name is not a Rust path (such
/// as runtime workers named `tokio-runtime-worker`) resolve to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadNameContext;

impl ThreadNameContext {
    fn metadata_for(thread_name: &str) -> Option<TestMetadata> {
        let name = thread_name.trim();
        if name == "main" || !name.split("::").all(is_identifier) {
            return None;
        }

        let (display_name, labels) = name.rsplit_once("::").map_or_else(
            || (name, Vec::new()),
            |(module, test)| (test, vec![GroupLabel::feature(module)]),
        );

        Some(TestMetadata {
            display_name: Some(display_name.to_owned()),
            labels,
        })
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut characters = segment.chars();
    characters
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && characters.all(|character| character.is_alphanumeric() || character == '_')
}

impl TestContextProvider for ThreadNameContext {
    fn try_resolve(&self) -> Option<TestMetadata> {
        thread::current().name().and_then(Self::metadata_for)
    }
}
