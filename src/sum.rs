//! Reduces a token list to its total. Negative tokens abort the whole call and tokens of 1000 or
//! more are ignored rather than rejected.

use crate::error::AddError;

/// Tokens at or above this value don't count towards the total.
pub(crate) const MAX_COUNTED: i64 = 1000;

/// Returns the sum of `tokens`, ignoring any token of [`MAX_COUNTED`] or more. Fails if any token
/// is negative, reporting all of them in input order.
pub(crate) fn total(tokens: &[i64]) -> Result<i64, AddError> {
    let negatives: Vec<i64> = tokens.iter().copied().filter(|&value| value < 0).collect();
    if !negatives.is_empty() {
        return Err(AddError::NegativesFound(negatives));
    }
    Ok(tokens.iter().filter(|&&value| value < MAX_COUNTED).sum())
}
