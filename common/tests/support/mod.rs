//! Shared helpers for the behaviour suites.
//!
//! Exposes `StepText`, which parses quoted step parameters and expands `\n`
//! escapes so scenarios can describe multi-line step text on one line.

pub mod step_text;
