//! Utility functions and constants for text processing.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed by [`trim`]: whitespace plus NUL, without FF.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

// Space, tab, LF, VT, FF, CR. Non-breaking spaces are content.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("valid regex"));

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"));

/// Trim spaces, tabs, line breaks, NUL and vertical tabs from both ends
pub fn trim(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

/// Trim the same characters as [`trim`] from the end only
pub fn trim_end(s: &str) -> &str {
    s.trim_end_matches(TRIM_CHARS)
}

/// Collapse every run of whitespace to a single space
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(s, " ")
}

/// Split on CRLF, CR or LF
pub fn split_lines(s: &str) -> Vec<&str> {
    LINE_BREAK.split(s).collect()
}

/// Decode HTML character references (named and numeric)
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Read an attribute, treating a missing one as empty
pub fn attribute_or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a \n\t  b"), "a b");
        assert_eq!(collapse_whitespace("\r\nline"), " line");
        assert_eq!(collapse_whitespace("plain"), "plain");
    }

    #[test]
    fn test_collapse_whitespace_keeps_nbsp() {
        assert_eq!(collapse_whitespace("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("\0 \x0B text \r\n"), "text");
        assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
        assert_eq!(trim_end("  text \n\n"), "  text");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("single"), vec!["single"]);
        assert_eq!(split_lines("\nx\n"), vec!["", "x", ""]);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&lt;b&gt; &amp; &quot;"), "<b> & \"");
        assert_eq!(decode_entities("&nbsp;"), "\u{a0}");
        assert_eq!(decode_entities("&#xD;"), "\r");
        assert_eq!(decode_entities("&amp;nbsp;"), "&nbsp;");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("=", 5), "=====");
        assert_eq!(repeat("-", 3), "---");
    }

    #[test]
    fn test_attribute_or_empty() {
        assert_eq!(attribute_or_empty(Some("x")), "x");
        assert_eq!(attribute_or_empty(None), "");
    }
}
