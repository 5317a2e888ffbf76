//! Execution and narration of test steps.
//!
//! A [`Narrator`] runs a step's logic, records whether it passed, and
//! narrates the step to its sinks before handing the outcome back. A step
//! fails when it returns `Err` or panics. Either way the narration is emitted
//! first and the failure is then returned or resumed unchanged, so the
//! surrounding test fails exactly as it would have without narration.
//!
//! ```
//! use std::sync::Arc;
//!
//! use gherkit::{Narrator, RecordingSink, StaticContext};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let narrator = Narrator::silent()
//!     .with_context(StaticContext::new().with_display_name("adds_items"))
//!     .with_lexicon(gherkit::Lexicon::english().clone())
//!     .with_sink(sink.clone());
//!
//! let Ok(outcome) = narrator.execute("Given an empty cart\nThen it holds nothing", || ());
//! assert!(!outcome.failed());
//! assert_eq!(
//!     sink.entries(),
//!     [concat!(
//!         "TEST RESULT: 🟢 SUCCESS\n",
//!         "  ⤷ SCENARIO adds_items\n",
//!         "    | GIVEN ↘ an empty cart\n",
//!         "    |  THEN ↘ it holds nothing",
//!     )],
//! );
//! ```

mod request;

use std::any::Any;
use std::future::{self, Future};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;
use gherkit_common::i18n::StepStatus;
use gherkit_common::lexicon::Lexicon;
use log::debug;

use crate::config::default_lexicon;
use crate::context::{TestContext, TestContextProvider, ThreadNameContext, resolve_context};
use crate::narration::{NarratedStep, compose, has_steps};
use crate::output::{ConsoleSink, OutputSink};

pub use request::{StepRequest, StepReturn};
use request::method_name_of;

type PanicPayload = Box<dyn Any + Send + 'static>;

/// Record of one narrated step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    step_text: String,
    method_name: Option<String>,
    status: StepStatus,
    is_background: bool,
    lexicon: Arc<Lexicon>,
    context: TestContext,
    narration: String,
}

impl StepOutcome {
    /// Raw step text.
    #[must_use]
    pub fn step_text(&self) -> &str {
        &self.step_text
    }

    /// Name of the function backing the step.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Whether the step passed.
    #[must_use]
    pub const fn status(&self) -> StepStatus {
        self.status
    }

    /// Whether the step failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.status.is_failed()
    }

    /// Whether the step belongs to a background.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.is_background
    }

    /// Lexicon that decorated the step.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Context resolved for the step.
    #[must_use]
    pub const fn context(&self) -> &TestContext {
        &self.context
    }

    /// Narration sent to the sinks; empty when the step text was blank.
    #[must_use]
    pub fn narration(&self) -> &str {
        &self.narration
    }
}

/// Runs steps and narrates them.
///
/// Cloning is cheap; clones share providers and sinks.
#[derive(Clone)]
pub struct Narrator {
    context: Option<Arc<dyn TestContextProvider>>,
    sinks: Vec<Arc<dyn OutputSink>>,
    lexicon: Option<Arc<Lexicon>>,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator {
    /// Narrator writing to the console, without test context.
    #[must_use]
    pub fn new() -> Self {
        Self::silent().with_sink(Arc::new(ConsoleSink))
    }

    /// Narrator for the standard libtest harness.
    ///
    /// Names scenarios after the running test; see [`ThreadNameContext`].
    #[must_use]
    pub fn for_libtest() -> Self {
        Self::new().with_context(ThreadNameContext)
    }

    /// Narrator with no sinks and no context.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            context: None,
            sinks: Vec::new(),
            lexicon: None,
        }
    }

    /// Resolve test metadata through `provider`.
    #[must_use]
    pub fn with_context(mut self, provider: impl TestContextProvider + 'static) -> Self {
        self.context = Some(Arc::new(provider));
        self
    }

    /// Also emit narration to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Decorate with `lexicon` unless a request overrides it.
    ///
    /// Without one, the process-wide default applies at each call.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = Some(lexicon.into());
        self
    }

    /// Run `step` and narrate it.
    ///
    /// # Errors
    ///
    /// Returns the step's own error after narrating the failure.
    ///
    /// # Panics
    ///
    /// Resumes the step's panic, with its original payload, after narrating
    /// the failure.
    pub fn execute<F, R>(
        &self,
        request: impl Into<StepRequest>,
        step: F,
    ) -> Result<StepOutcome, R::Error>
    where
        F: FnOnce() -> R,
        R: StepReturn,
    {
        let method_name = method_name_of::<F>();
        let settled = panic::catch_unwind(AssertUnwindSafe(|| step().into_result()));
        self.settle(request.into(), method_name, settled)
    }

    /// Run `step` as part of a background.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    ///
    /// # Panics
    ///
    /// See [`Self::execute`].
    pub fn background<F, R>(
        &self,
        request: impl Into<StepRequest>,
        step: F,
    ) -> Result<StepOutcome, R::Error>
    where
        F: FnOnce() -> R,
        R: StepReturn,
    {
        let method_name = method_name_of::<F>();
        let settled = panic::catch_unwind(AssertUnwindSafe(|| step().into_result()));
        self.settle(request.into().background(true), method_name, settled)
    }

    /// Await `step` and narrate it once it settles.
    ///
    /// Nothing is emitted while the step is suspended.
    ///
    /// # Errors
    ///
    /// Returns the step's own error after narrating the failure.
    ///
    /// # Panics
    ///
    /// Resumes the step's panic, with its original payload, after narrating
    /// the failure.
    pub async fn execute_async<F, Fut>(
        &self,
        request: impl Into<StepRequest>,
        step: F,
    ) -> Result<StepOutcome, <Fut::Output as StepReturn>::Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
        Fut::Output: StepReturn,
    {
        let request = request.into();
        let method_name = method_name_of::<F>();
        let settled = AssertUnwindSafe(async move { step().await.into_result() })
            .catch_unwind()
            .await;
        self.settle(request, method_name, settled)
    }

    /// Await `step` as part of a background.
    ///
    /// # Errors
    ///
    /// See [`Self::execute_async`].
    ///
    /// # Panics
    ///
    /// See [`Self::execute_async`].
    pub async fn background_async<F, Fut>(
        &self,
        request: impl Into<StepRequest>,
        step: F,
    ) -> Result<StepOutcome, <Fut::Output as StepReturn>::Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
        Fut::Output: StepReturn,
    {
        self.execute_async(request.into().background(true), step)
            .await
    }

    /// Narrate steps that have no logic behind them.
    pub fn non_executable(&self, request: impl Into<StepRequest>) -> StepOutcome {
        self.narrate(request.into(), None, StepStatus::Passed)
    }

    /// Asynchronous form of [`Self::non_executable`].
    pub fn non_executable_async(
        &self,
        request: impl Into<StepRequest>,
    ) -> impl Future<Output = StepOutcome> {
        future::ready(self.non_executable(request))
    }

    fn settle<E>(
        &self,
        request: StepRequest,
        derived_name: Option<String>,
        settled: Result<Result<(), E>, PanicPayload>,
    ) -> Result<StepOutcome, E> {
        let failed = !matches!(settled, Ok(Ok(())));
        let outcome = self.narrate(request, derived_name, StepStatus::from_failed(failed));

        match settled {
            Ok(Ok(())) => Ok(outcome),
            Ok(Err(error)) => Err(error),
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    fn narrate(
        &self,
        request: StepRequest,
        derived_name: Option<String>,
        status: StepStatus,
    ) -> StepOutcome {
        let (step_text, requested_name, is_background, lexicon) = request.into_parts();
        let lexicon = lexicon
            .or_else(|| self.lexicon.clone())
            .unwrap_or_else(default_lexicon);
        let method_name = requested_name.or(derived_name);
        let context = resolve_context(self.context.as_deref());

        let narration = compose(
            &NarratedStep {
                text: &step_text,
                method_name: method_name.as_deref(),
                status,
                is_background,
                lexicon: &lexicon,
            },
            &context,
        );

        if has_steps(&step_text) {
            debug!(
                target: "gherkit::executor",
                "narrating {status} step with lexicon `{}`",
                lexicon.name(),
            );
            self.emit(&narration);
        }

        StepOutcome {
            step_text,
            method_name,
            status,
            is_background,
            lexicon,
            context,
            narration,
        }
    }

    fn emit(&self, narration: &str) {
        let test_log = self
            .context
            .as_ref()
            .and_then(|provider| provider.test_log());

        for sink in test_log.iter().chain(&self.sinks) {
            sink.emit(narration);
        }
    }
}
