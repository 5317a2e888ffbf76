//! Error types for the `gherkit` binary.

use std::io;

use camino::Utf8PathBuf;
use gherkit::ConfigError;
use thiserror::Error;

/// Errors reported by the `gherkit` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file or a requested lexicon was unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The step file could not be read.
    #[error("failed to read steps from `{path}`: {source}")]
    ReadInput {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read steps from stdin: {0}")]
    ReadStdin(#[source] io::Error),

    /// The narration could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;
