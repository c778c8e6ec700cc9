//! DOM node structure for HTML to Markdown conversion.
//!
//! The tree is owned top-down: an [`Element`] owns its children by value.
//! Upward navigation (parent tag, sibling position, ancestor search) goes
//! through [`NodeRef`], a borrowed view that links to its parent view on the
//! stack instead of storing parent pointers in the tree.

use indexmap::IndexMap;

/// A parsed HTML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Top-level nodes, normally a single `html` element
    pub children: Vec<Node>,
}

impl Document {
    /// Create a document from its top-level nodes
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// The node conversion starts from: the first `body`, else the first `head`.
    pub fn entry_point(&self) -> Option<NodeRef<'_>> {
        self.find("body").or_else(|| self.find("head"))
    }

    fn find(&self, tag: &str) -> Option<NodeRef<'_>> {
        self.children
            .iter()
            .find_map(|child| find_element(child, tag))
            .map(NodeRef::root)
    }
}

/// Depth-first search in document order
fn find_element<'a>(node: &'a Node, tag: &str) -> Option<&'a Node> {
    if node.tag_name() == Some(tag) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_element(child, tag))
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name, e.g. "div"
    pub tag_name: String,
    /// Attributes in source order
    pub attributes: IndexMap<String, String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

/// A DOM node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag_name: tag_name.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag_name: tag_name.to_lowercase(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name for elements, `None` for text and comments
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag_name.as_str())
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?
            .attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Add a child node. Text and comment nodes have no children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element
                .attributes
                .insert(name.to_lowercase(), value.to_string());
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Comment(_) => String::new(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Number of levels in this subtree; a leaf counts as 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Canonical serialization of this node.
    ///
    /// Every element gets an explicit end tag, attributes are sorted by name,
    /// text and attribute values are escaped and comments are omitted.
    pub fn canonical_html(&self) -> String {
        match self {
            Node::Text(text) => escape_text(text),
            Node::Comment(_) => String::new(),
            Node::Element(element) => {
                let inner: String = element.children.iter().map(Node::canonical_html).collect();
                element.canonical_wrap(&inner)
            }
        }
    }
}

impl Element {
    /// Wrap already-escaped inner markup in this element's canonical tags
    pub fn canonical_wrap(&self, inner: &str) -> String {
        format!("{}{}</{}>", self.canonical_start_tag(), inner, self.tag_name)
    }

    fn canonical_start_tag(&self) -> String {
        let mut attrs: Vec<(&String, &String)> = self.attributes.iter().collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));

        let mut tag = format!("<{}", self.tag_name);
        for (name, value) in attrs {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        tag.push('>');
        tag
    }
}

/// Escape text content for canonical output
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#xD;")
}

/// Escape an attribute value for canonical output
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('\t', "&#x9;")
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
}

/// A reference to a node with parent context.
///
/// The parent link is a borrow of the caller's own `NodeRef`, so a chain of
/// these mirrors the recursion stack and never owns anything.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent: Option<&'a NodeRef<'a>>,
    index: usize,
}

impl<'a> NodeRef<'a> {
    /// A node without parent context
    pub fn root(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            index: 0,
        }
    }

    /// A view of the `index`-th child of `parent`
    pub fn child(parent: &'a NodeRef<'a>, index: usize) -> Option<Self> {
        let node = parent.node.children().get(index)?;
        Some(Self {
            node,
            parent: Some(parent),
            index,
        })
    }

    pub fn parent(&self) -> Option<&'a NodeRef<'a>> {
        self.parent
    }

    /// Get the parent tag name if known
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent().and_then(NodeRef::tag_name)
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.tag_name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    /// 1-based position among all of the parent's child nodes, text and
    /// comments included.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// The child node right after this one in the parent, of any kind
    pub fn next_sibling(&self) -> Option<&'a Node> {
        self.parent?.node.children().get(self.index + 1)
    }

    /// Is any ancestor an element named `ancestor_tag`?
    pub fn is_descendant_of(&self, ancestor_tag: &str) -> bool {
        let mut current = self.parent;
        while let Some(p) = current {
            if p.tag_name() == Some(ancestor_tag) {
                return true;
            }
            current = p.parent;
        }
        false
    }
}
