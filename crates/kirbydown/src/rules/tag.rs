//! Closed set of node kinds the converter knows about.

use crate::node::Node;

/// What a node converts as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Text,
    Comment,
    Paragraph,
    Preformatted,
    /// h1..h6
    Heading(u8),
    /// em, i
    Emphasis,
    /// strong, b
    Strong,
    HorizontalRule,
    LineBreak,
    Blockquote,
    Code,
    /// ol, ul
    List,
    ListItem,
    Image,
    Anchor,
    /// Anything without a Markdown rule
    Other,
}

impl TagKind {
    pub fn of(node: &Node) -> Self {
        match node {
            Node::Text(_) => TagKind::Text,
            Node::Comment(_) => TagKind::Comment,
            Node::Element(element) => Self::from_tag(&element.tag_name),
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "p" => TagKind::Paragraph,
            "pre" => TagKind::Preformatted,
            "h1" => TagKind::Heading(1),
            "h2" => TagKind::Heading(2),
            "h3" => TagKind::Heading(3),
            "h4" => TagKind::Heading(4),
            "h5" => TagKind::Heading(5),
            "h6" => TagKind::Heading(6),
            "em" | "i" => TagKind::Emphasis,
            "strong" | "b" => TagKind::Strong,
            "hr" => TagKind::HorizontalRule,
            "br" => TagKind::LineBreak,
            "blockquote" => TagKind::Blockquote,
            "code" => TagKind::Code,
            "ol" | "ul" => TagKind::List,
            "li" => TagKind::ListItem,
            "img" => TagKind::Image,
            "a" => TagKind::Anchor,
            _ => TagKind::Other,
        }
    }
}
