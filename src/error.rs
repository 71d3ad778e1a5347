//! The ways an input can be rejected. Every failure is a deterministic function of the input and
//! the configured cap, so retrying an identical call yields an identical failure.

use thiserror::Error;

/// A failure produced by [`Accumulator::add`](crate::Accumulator::add). Each variant carries the
/// part of the input that triggered it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddError {
    /// One or more negative numbers were found. The message lists all of them, comma-joined, in
    /// the order they appeared.
    #[error("negatives not allowed: {}", join(.0))]
    NegativesFound(Vec<i64>),

    /// The input, or a piece of it part-way through splitting, ends with the carried delimiter.
    #[error("input ends with a delimiter: {0:?}")]
    TrailingDelimiter(String),

    /// The carried piece isn't a number and no remaining delimiter splits it further.
    #[error("cannot parse {0:?}: no matching delimiter")]
    UnknownDelimiter(String),

    /// The input contains more numbers than the configured cap.
    #[error("input contains {found} numbers, more than the limit of {limit}")]
    TooManyElements { found: usize, limit: usize },

    /// The carried token is numeric but too large in magnitude to fit in an `i64`.
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
