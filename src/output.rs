//! Destinations for finished narration.
//!
//! Sinks receive complete, newline-free narration blocks and decide how to
//! terminate them. Emission is fire-and-forget: a sink that cannot write logs
//! the problem and carries on, so narration never changes a step's outcome.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;

/// Receiver of composed narration.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink: Send + Sync {
    /// Write one narration block.
    fn emit(&self, narration: &str);
}

/// Writes narration to standard output.
///
/// Each block is newline-terminated and followed by a blank line, so the
/// narration of consecutive steps stays readable in captured test output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn write_block(writer: &mut impl Write, narration: &str) -> io::Result<()> {
        writeln!(writer, "{narration}")?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&self, narration: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(error) = Self::write_block(&mut stdout, narration) {
            warn!(target: "gherkit::output", "failed to write narration to stdout: {error}");
        }
    }
}

/// Keeps every narration block in memory.
///
/// ```
/// use gherkit::output::{OutputSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// sink.emit("TEST RESULT: 🟢 SUCCESS");
/// assert_eq!(sink.entries(), ["TEST RESULT: 🟢 SUCCESS"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded blocks, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// The most recent block.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Number of recorded blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every recorded block.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking step may poison the lock mid-test; the entries stay valid.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, narration: &str) {
        self.lock().push(narration.to_owned());
    }
}
