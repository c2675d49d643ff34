// SPDX-License-Identifier: MIT

use thiserror::Error;

/// The input did not match `oklch(<L>[%] <C> <H>[deg] [/ <A>[%]])`.
///
/// Carries the offending input so a batch caller can report which
/// declaration broke the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid OKLCH string format: \"{input}\"")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
