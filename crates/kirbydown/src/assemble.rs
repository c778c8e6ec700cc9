//! Turns the rewritten tree text into the final Markdown string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::decode_entities;

static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!DOCTYPE [^>]+>").expect("valid regex"));

/// Wrapper markup and parser artifacts removed from the output
const UNWANTED: &[&str] = &[
    "<html>",
    "</html>",
    "<body>",
    "</body>",
    "<head>",
    "</head>",
    "<?xml encoding=\"UTF-8\">",
    "&#xD;",
];

const TRIM_CHARS: &[char] = &['\n', '\r', '\0', '\x0B'];

/// Serialize and clean the text left by the rewrite.
///
/// Serializing escapes the text like an HTML serializer would. The two
/// decoding passes that follow undo that escaping and then resolve
/// references that were themselves encoded in the source (`&amp;nbsp;`).
pub fn assemble(rewritten: &str) -> String {
    let serialized = html_escape::encode_text(rewritten);
    let once = decode_entities(&serialized).into_owned();
    let twice = decode_entities(&once).into_owned();

    let mut markdown = DOCTYPE.replace_all(&twice, "").into_owned();
    for unwanted in UNWANTED {
        markdown = markdown.replace(unwanted, "");
    }

    markdown.trim_matches(TRIM_CHARS).to_string()
}
