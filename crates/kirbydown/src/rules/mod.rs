//! Rule dispatch for HTML to Markdown conversion.

mod kirbytext;
mod tag;

pub use tag::TagKind;

use crate::node::{escape_text, Node, NodeRef};
use crate::options::ConversionOptions;
use crate::utilities::decode_entities;

/// Convert one node into its Markdown replacement.
///
/// `content` is the node's value: the concatenated replacements of its
/// children, already converted. For nodes inside `code` it is their
/// canonical markup instead.
pub fn replacement(node: &NodeRef, content: &str, options: &ConversionOptions) -> String {
    match TagKind::of(node.node) {
        TagKind::Text => kirbytext::text(content),
        TagKind::Comment => String::new(),
        TagKind::Paragraph | TagKind::Preformatted => kirbytext::paragraph(content),
        TagKind::Heading(level @ 1..=2) => kirbytext::setext_heading(node, level, content, options),
        TagKind::Heading(level) => kirbytext::atx_heading(level, content),
        TagKind::Emphasis => kirbytext::wrap(content, &options.italic_style),
        TagKind::Strong => kirbytext::wrap(content, &options.bold_style),
        TagKind::HorizontalRule => kirbytext::horizontal_rule(),
        TagKind::LineBreak => kirbytext::line_break(),
        TagKind::Blockquote => kirbytext::blockquote(content),
        TagKind::Code => kirbytext::code(node, content),
        TagKind::List => kirbytext::list(content),
        TagKind::ListItem => kirbytext::list_item(node, content),
        TagKind::Image => kirbytext::image(node),
        TagKind::Anchor => kirbytext::anchor(node, content),
        TagKind::Other => keep_or_strip(node.node, content, options),
    }
}

/// Tags without a Markdown equivalent: keep the markup, or only the text
/// when `strip_tags` is set.
fn keep_or_strip(node: &Node, content: &str, options: &ConversionOptions) -> String {
    match node.as_element() {
        Some(element) if !options.strip_tags => {
            decode_entities(&element.canonical_wrap(&escape_text(content))).into_owned()
        }
        _ => content.to_string(),
    }
}
