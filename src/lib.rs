//! Sums the integers in a delimited string. By default numbers are separated by commas and
//! newlines; an input can instead declare its own delimiters with a `//<delim1>|<delim2>|...\n`
//! header. Negative numbers are rejected, numbers of 1000 or more are ignored, and an optional
//! cap bounds how many numbers one input may carry.
//!
//! ```
//! use addup::Accumulator;
//!
//! let accumulator = Accumulator::new(0);
//! assert_eq!(accumulator.add("1,2,3"), Ok(6));
//! assert_eq!(accumulator.add("//;\n1;2"), Ok(3));
//! ```

#![forbid(unsafe_code)]

mod delimiter;
mod error;
pub mod escape;
mod sum;
mod tokenize;

pub use error::AddError;

use log::info;

/// Sums delimited integer strings. Holds only the element cap, so a single instance can serve any
/// number of [`add`](Accumulator::add) calls.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator {
    max_count: usize,
}

impl Accumulator {
    /// Creates an accumulator that accepts at most `max_count` numbers per input. Zero means
    /// unlimited.
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }

    /// The element cap this accumulator was created with.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Sums the numbers in `input`. The same input always yields the same result: nothing carries
    /// over from one call to the next.
    pub fn add(&self, input: &str) -> Result<i64, AddError> {
        let (delimiters, body) = delimiter::resolve(input);
        let mut tokens = Vec::new();
        tokenize::tokenize(&delimiters, body, self.max_count, &mut tokens)?;
        let total = sum::total(&tokens)?;
        info!("summed {} token(s) to {total}", tokens.len());
        Ok(total)
    }
}
