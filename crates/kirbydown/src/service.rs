//! Converter - the main entry point for HTML to Markdown conversion.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::assemble::assemble;
use crate::node::{Document, Node, NodeRef};
use crate::options::ConversionOptions;
use crate::rules::{self, TagKind};
use crate::{KirbydownError, Result};

/// Deepest tree, counted from the entry point down, that the rewrite accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// A malformed-markup message from the HTML parser. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic(pub String);

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markdown output together with the parser's diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markdown: String,
    /// Empty when `suppress_parse_errors` is set
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// The main service for converting HTML to Markdown
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConversionOptions {
        &mut self.options
    }

    /// Convert an HTML string to Markdown
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> Result<String> {
        self.convert_with_diagnostics(html).map(|c| c.markdown)
    }

    /// Convert an HTML string, also returning parser diagnostics unless they
    /// are suppressed
    #[cfg(feature = "html")]
    pub fn convert_with_diagnostics(&self, html: &str) -> Result<Conversion> {
        debug!(input_len = html.len(), "converting html");
        let parsed = crate::html::parse_document(html);

        let diagnostics = if self.options.suppress_parse_errors {
            Vec::new()
        } else {
            for diagnostic in &parsed.diagnostics {
                warn!(%diagnostic, "malformed html");
            }
            parsed.diagnostics
        };

        let markdown = self.convert_document(&parsed.document)?;
        Ok(Conversion {
            markdown,
            diagnostics,
        })
    }

    /// Convert an already parsed document to Markdown
    pub fn convert_document(&self, document: &Document) -> Result<String> {
        let entry = document
            .entry_point()
            .ok_or(KirbydownError::NoRootElement)?;
        debug!(entry = entry.tag_name().unwrap_or_default(), "rewriting tree");

        let depth = entry.node.depth();
        if depth > MAX_NESTING_DEPTH {
            warn!(depth, limit = MAX_NESTING_DEPTH, "document nested too deep");
            return Err(KirbydownError::NestingTooDeep {
                depth,
                limit: MAX_NESTING_DEPTH,
            });
        }

        let rewritten = self.rewrite(&entry, false);
        let markdown = assemble(&rewritten);

        debug!(output_len = markdown.len(), "conversion finished");
        Ok(markdown)
    }

    /// Post-order walk: children first, then the node itself.
    ///
    /// Under `code` nothing is converted; those nodes contribute their
    /// canonical markup so the code rule sees the original HTML.
    fn rewrite(&self, node: &NodeRef<'_>, in_code: bool) -> String {
        if in_code {
            return node.node.canonical_html();
        }

        let content = match node.node {
            Node::Text(text) | Node::Comment(text) => text.clone(),
            Node::Element(element) => {
                let children_in_code = TagKind::of(node.node) == TagKind::Code;
                (0..element.children.len())
                    .filter_map(|index| NodeRef::child(node, index))
                    .map(|child| self.rewrite(&child, children_in_code))
                    .collect()
            }
        };

        let markdown = rules::replacement(node, &content, &self.options);
        if let Some(tag) = node.tag_name() {
            trace!(tag, len = markdown.len(), "converted element");
        }
        markdown
    }
}

/// Convert an HTML string to Markdown with the given options
#[cfg(feature = "html")]
pub fn convert(html: &str, options: &ConversionOptions) -> Result<String> {
    Converter::with_options(options.clone()).convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HeaderStyle;

    fn document(body_children: Vec<Node>) -> Document {
        let mut body = Node::element("body");
        for child in body_children {
            body.add_child(child);
        }
        let mut html = Node::element("html");
        html.add_child(Node::element("head"));
        html.add_child(body);
        Document::new(vec![html])
    }

    fn make(tag: &str, text: &str) -> Node {
        let mut node = Node::element(tag);
        node.add_child(Node::text(text));
        node
    }

    #[test]
    fn test_simple_paragraph() {
        let converter = Converter::new();
        let result = converter
            .convert_document(&document(vec![make("p", "Hello World")]))
            .unwrap();
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_heading_setext() {
        let converter = Converter::new();
        let result = converter
            .convert_document(&document(vec![make("h1", "Title")]))
            .unwrap();
        assert_eq!(result, "Title\n=====");
    }

    #[test]
    fn test_heading_atx() {
        let options = ConversionOptions {
            header_style: HeaderStyle::Atx,
            ..Default::default()
        };
        let converter = Converter::with_options(options);
        let result = converter
            .convert_document(&document(vec![make("h2", "Title")]))
            .unwrap();
        assert_eq!(result, "## Title");
    }

    #[test]
    fn test_strip_tags_removes_body_wrapper_too() {
        let options = ConversionOptions {
            strip_tags: true,
            ..Default::default()
        };
        let converter = Converter::with_options(options);
        let result = converter
            .convert_document(&document(vec![make("div", "plain")]))
            .unwrap();
        assert_eq!(result, "plain");
    }

    #[test]
    fn test_code_children_are_not_converted() {
        let mut code = Node::element("code");
        code.add_child(make("b", "not bold"));
        let result = Converter::new()
            .convert_document(&document(vec![code]))
            .unwrap();
        assert_eq!(result, "`<b>not bold</b>`");
    }

    #[test]
    fn test_head_is_used_without_body() {
        let mut head = Node::element("head");
        head.add_child(make("title", "Only head"));
        let mut html = Node::element("html");
        html.add_child(head);

        let result = Converter::new()
            .convert_document(&Document::new(vec![html]))
            .unwrap();
        assert_eq!(result, "<title>Only head</title>");
    }

    #[test]
    fn test_nesting_limit() {
        fn nested(levels: usize) -> Node {
            let mut node = Node::text("x");
            for _ in 0..levels {
                let mut span = Node::element("span");
                span.add_child(node);
                node = span;
            }
            node
        }

        // body plus the spans plus the text leaf
        let at_limit = document(vec![nested(MAX_NESTING_DEPTH - 2)]);
        assert!(Converter::new().convert_document(&at_limit).is_ok());

        let too_deep = document(vec![nested(MAX_NESTING_DEPTH - 1)]);
        let err = Converter::new().convert_document(&too_deep).unwrap_err();
        assert!(matches!(
            err,
            KirbydownError::NestingTooDeep { depth, limit }
                if depth == MAX_NESTING_DEPTH + 1 && limit == MAX_NESTING_DEPTH
        ));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let document = Document::new(vec![make("div", "orphan")]);
        let err = Converter::new().convert_document(&document).unwrap_err();
        assert!(matches!(err, KirbydownError::NoRootElement));
    }

    #[test]
    fn test_options_mut() {
        let mut converter = Converter::new();
        converter.options_mut().italic_style = "_".to_string();
        let result = converter
            .convert_document(&document(vec![make("em", "x")]))
            .unwrap();
        assert_eq!(result, "_x_");
        assert_eq!(converter.options().italic_style, "_");
    }
}
