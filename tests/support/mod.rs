//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes `StepText`, which strips quotes from step parameters and expands
//! `\n` escapes so a scenario can describe multi-line step text on one line.
pub mod step_text;
