//! Command-line previews of gherkit narration.
//!
//! The `gherkit` binary renders step text with any built-in or configured
//! lexicon, which makes it easy to try a custom lexicon before wiring it into
//! a test suite.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error types reported by the binary
//! - [`run`] - Command execution against injected input and output streams

pub mod cli;
pub mod error;
pub mod run;
