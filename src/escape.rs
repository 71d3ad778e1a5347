//! Decodes backslash escape sequences in command-line input, so that a shell argument like
//! `1\n2,3` carries a real newline by the time it's parsed.

/// Replaces the escape sequences `\n`, `\t`, `\r`, `\0` and `\\` in `input` with the characters
/// they name. Any other backslash sequence, and a trailing backslash, pass through unchanged.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::unescape;

    #[test]
    fn plain_input_passes_through() {
        assert_eq!(unescape("1,2,3"), "1,2,3");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn named_escapes_decode() {
        assert_eq!(unescape(r"12\n13,4"), "12\n13,4");
        assert_eq!(unescape(r"1\t2"), "1\t2");
        assert_eq!(unescape(r"1\r2"), "1\r2");
        assert_eq!(unescape(r"1\02"), "1\02");
    }

    #[test]
    fn doubled_backslash_is_literal() {
        assert_eq!(unescape(r"1\\n2"), r"1\n2");
    }

    #[test]
    fn unknown_escape_is_kept_verbatim() {
        assert_eq!(unescape(r"1\q2"), r"1\q2");
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(unescape(r"1,2\"), r"1,2\");
    }
}
