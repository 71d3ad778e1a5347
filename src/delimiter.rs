//! Determines which delimiters apply to an input. An input may declare its own delimiters with a
//! header of the form `//<delim1>|<delim2>|...\n`; without one, comma and newline are used.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an input that starts with a custom delimiter header. `(?s)` makes `.` match newlines,
/// so both groups are greedy across the whole input: when the body itself contains newlines, the
/// header group extends to the last one.
static INPUT_WITH_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(//.+\n)(.+)$").unwrap());

/// Extracts the delimiter payload from a header matched by `INPUT_WITH_HEADER`.
static HEADER_PAYLOAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^//(.+)\n$").unwrap());

const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// Returns the delimiters declared by `input` together with the numeric body they apply to. An
/// input without a header (including one where the header is the entire input) gets the default
/// delimiters and is returned unchanged as the body.
pub(crate) fn resolve(input: &str) -> (Vec<String>, &str) {
    let header_and_body = INPUT_WITH_HEADER
        .captures(input)
        .and_then(|captures| Some((captures.get(1)?.as_str(), captures.get(2)?.as_str())));
    let Some((header, body)) = header_and_body else {
        return (ordered(DEFAULT_DELIMITERS.map(String::from)), input);
    };
    let delimiters = match payload(header) {
        Some(payload) => ordered(payload.split('|').map(String::from)),
        None => Vec::new(),
    };
    debug!("custom delimiter header found; delimiters: {delimiters:?}");
    (delimiters, body)
}

fn payload(header: &str) -> Option<&str> {
    HEADER_PAYLOAD
        .captures(header)
        .and_then(|captures| captures.get(1))
        .map(|payload| payload.as_str())
}

/// Deduplicates `candidates` and orders them for matching: longest first, so that a delimiter is
/// never pre-empted by a shorter delimiter that happens to be a prefix of it, with length ties
/// broken lexicographically. Empty candidates (from adjacent or boundary pipes in the payload)
/// are dropped.
fn ordered(candidates: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut delimiters: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| !candidate.is_empty())
        .collect();
    delimiters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    delimiters.dedup();
    delimiters
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[track_caller]
    fn check(input: &str, expected_delimiters: &[&str], expected_body: &str) {
        let (delimiters, body) = resolve(input);
        assert_eq!(delimiters, expected_delimiters);
        assert_eq!(body, expected_body);
    }

    #[test]
    fn no_header_uses_defaults() {
        check("1,2", &["\n", ","], "1,2");
        check("", &["\n", ","], "");
    }

    #[test]
    fn single_custom_delimiter() {
        check("//&\n2&5&4", &["&"], "2&5&4");
    }

    #[test]
    fn multiple_custom_delimiters_sorted_for_matching() {
        // Longest first, ties broken lexicographically.
        check("//$|&\n12&3$4", &["$", "&"], "12&3$4");
        check("//*|***\n4*6***23", &["***", "*"], "4*6***23");
        check("//ab|aa\n1aa2ab3", &["aa", "ab"], "1aa2ab3");
    }

    #[test]
    fn duplicate_delimiters_collapse() {
        check("//&|&\n1&2", &["&"], "1&2");
    }

    #[test]
    fn empty_payload_segments_are_dropped() {
        check("//a||b\n1a2b3", &["a", "b"], "1a2b3");
        check("//a|\n1a2", &["a"], "1a2");
        // A payload of pipes alone declares no delimiters at all.
        check("//|\n5", &[], "5");
    }

    #[test]
    fn header_without_body_is_not_a_header() {
        // The header pattern requires at least one character after the newline, so the whole
        // input falls through as a body under the default delimiters.
        check("//&\n", &["\n", ","], "//&\n");
    }

    #[test]
    fn header_match_is_greedy() {
        // With `.` matching newlines, the header group runs to the last newline in the input, so
        // a body containing newlines donates everything before them to the delimiter payload.
        check("//;\n1;2\n3", &[";\n1;2"], "3");
    }
}
