//! Splits a numeric body into integers by applying delimiters longest-first. Each delimiter in
//! turn splits the pieces left by the previous one, so any mix of delimiters is accepted in a
//! single input.

use crate::error::AddError;
use once_cell::sync::Lazy;
use regex::Regex;

/// An optionally negated run of ASCII digits. A leading `+` is not accepted.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Parses `body` with `delimiters` (already in matching order), appending each integer to `out`.
/// Fails if `body` ends with a delimiter, contains a piece that no remaining delimiter can break
/// down, or yields more than `max_count` integers at any level. A `max_count` of zero means
/// unlimited.
pub(crate) fn tokenize(
    delimiters: &[String],
    body: &str,
    max_count: usize,
    out: &mut Vec<i64>,
) -> Result<(), AddError> {
    if body.is_empty() {
        return Ok(());
    }
    if let Some(delimiter) = delimiters.iter().find(|d| body.ends_with(d.as_str())) {
        return Err(AddError::TrailingDelimiter(delimiter.clone()));
    }
    match delimiters.split_first() {
        Some((first, rest)) => {
            // A body ending with any current delimiter was rejected above, so this split can't
            // produce a trailing empty piece.
            for piece in body.split(first.as_str()) {
                if TOKEN.is_match(piece) {
                    out.push(parse_token(piece)?);
                } else if rest.is_empty() {
                    return Err(AddError::UnknownDelimiter(piece.to_owned()));
                } else {
                    tokenize(rest, piece, max_count, out)?;
                }
            }
        }
        None => {
            if TOKEN.is_match(body) {
                out.push(parse_token(body)?);
            } else {
                return Err(AddError::UnknownDelimiter(body.to_owned()));
            }
        }
    }
    if max_count != 0 && out.len() > max_count {
        return Err(AddError::TooManyElements {
            found: out.len(),
            limit: max_count,
        });
    }
    Ok(())
}

fn parse_token(piece: &str) -> Result<i64, AddError> {
    piece
        .parse()
        .map_err(|_| AddError::NumberOutOfRange(piece.to_owned()))
}
