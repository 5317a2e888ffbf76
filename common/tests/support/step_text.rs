//! Step parameter parsing for behaviour scenarios.

use std::convert::Infallible;
use std::str::FromStr;

/// Quoted text supplied through a behaviour step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|stripped| stripped.strip_suffix('"'))
            .unwrap_or(trimmed);

        Ok(Self {
            raw: unquoted.replace("\\n", "\n"),
        })
    }
}

impl StepText {
    /// Borrow the parsed text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the step value, yielding the parsed text.
    pub fn into_inner(self) -> String {
        self.raw
    }
}
