//! Gherkin-style narration for Rust test steps.
//!
//! A test hands each step's text, and optionally the step's logic, to a
//! [`Narrator`]. The narrator runs the logic, records whether it passed, and
//! writes a decorated account of the step to every configured
//! [`OutputSink`]:
//!
//! ```text
//! TEST RESULT: 🟢 SUCCESS
//!   ⤷ SCENARIO adds_items
//!     | GIVEN ↘ an empty cart
//!     |  THEN ↘ it holds one item
//! ```
//!
//! Failures are narrated first and then handed back untouched: an `Err` is
//! returned as-is and a panic resumes with its original payload.
//!
//! The vocabulary comes from a [`Lexicon`]. The process-wide default can be
//! switched once at start-up through [`set_default_lexicon`] or
//! [`init_default_lexicon`], and any single call can override it.

pub mod config;
pub mod context;
pub mod executor;
pub mod narration;
pub mod output;

pub use config::{
    ConfigError, GherkitConfig, LEXICON_ENV_VAR, LexiconDefinition, LexiconSelection,
    LexiconSource, default_lexicon, init_default_lexicon, resolve_lexicon, set_default_lexicon,
};
pub use context::{
    GroupLabel, StaticContext, TestContext, TestContextProvider, TestMetadata,
    ThreadNameContext, resolve_context,
};
pub use executor::{Narrator, StepOutcome, StepRequest, StepReturn};
pub use gherkit_common::highlight::highlight;
pub use gherkit_common::i18n::StepStatus;
pub use gherkit_common::lexicon::{Lexicon, LexiconBuilder, LexiconError, StepCategory};
pub use narration::compose;
pub use output::{ConsoleSink, OutputSink, RecordingSink};
