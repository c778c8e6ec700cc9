//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and lowers the result into
//! the [`Document`]/[`Node`] structure used by the converter.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Document, Element, Node};
use crate::service::ParseDiagnostic;

static INTER_TAG_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">[ \t\n\x0B\x0C\r]+<").expect("valid regex"));

/// A parsed document and the parser's complaints about it
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub document: Document,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Remove whitespace that sits directly between two tags.
///
/// Otherwise indentation between `<li>`s or `<a>`s becomes text nodes, which
/// count as siblings for list numbering and anchor adjacency.
pub fn strip_inter_tag_whitespace(html: &str) -> Cow<'_, str> {
    INTER_TAG_WHITESPACE.replace_all(html, "><")
}

/// Parse an HTML string into a Document.
///
/// html5ever always synthesizes `html`, `head` and `body`. A body left empty
/// while the head holds content (a lone `<script>` or `<title>`) is dropped,
/// so [`Document::entry_point`] falls back to the head.
///
/// # Example
///
/// ```rust
/// use kirbydown::{parse_document, Converter};
///
/// let parsed = parse_document("<h1>Hello <em>World</em></h1>");
///
/// let converter = Converter::new();
/// let markdown = converter.convert_document(&parsed.document).unwrap();
/// assert_eq!(markdown, "Hello *World*\n=============");
/// ```
pub fn parse_document(html: &str) -> ParsedDocument {
    let html = Html::parse_document(&strip_inter_tag_whitespace(html));

    let mut root = scraper_to_node(html.root_element());
    drop_empty_body(&mut root);

    let diagnostics = html
        .errors
        .iter()
        .map(|e| ParseDiagnostic(e.to_string()))
        .collect();

    ParsedDocument {
        document: Document::new(vec![root]),
        diagnostics,
    }
}

fn drop_empty_body(root: &mut Node) {
    let Node::Element(html) = root else {
        return;
    };
    let head_has_content = html
        .children
        .iter()
        .any(|child| child.tag_name() == Some("head") && !child.children().is_empty());
    if head_has_content {
        html.children
            .retain(|child| !(child.tag_name() == Some("body") && child.children().is_empty()));
    }
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Walks with an explicit stack of open elements so nesting depth is bounded
/// by the heap, not the call stack.
fn scraper_to_node(root: ElementRef) -> Node {
    let mut stack = vec![(lower_element(root), root.children())];
    let mut lowered = None;

    while let Some((element, children)) = stack.last_mut() {
        match children.next() {
            Some(child) => match child.value() {
                ScraperNode::Text(text) => {
                    element.children.push(Node::Text(text.text.to_string()))
                }
                ScraperNode::Comment(comment) => {
                    element.children.push(Node::Comment(comment.comment.to_string()))
                }
                ScraperNode::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        stack.push((lower_element(child_element), child_element.children()));
                    }
                }
                _ => {}
            },
            None => {
                if let Some((finished, _)) = stack.pop() {
                    match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(Node::Element(finished)),
                        None => lowered = Some(Node::Element(finished)),
                    }
                }
            }
        }
    }

    lowered.unwrap_or_else(|| Node::Element(lower_element(root)))
}

/// Tag name and attributes, without children
fn lower_element(element: ElementRef) -> Element {
    let value = element.value();
    Element {
        tag_name: value.name().to_lowercase(),
        attributes: value
            .attrs()
            .map(|(name, val)| (name.to_string(), val.to_string()))
            .collect(),
        children: Vec::new(),
    }
}
