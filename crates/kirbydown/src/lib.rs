//! # kirbydown
//!
//! Convert HTML to Markdown with Kirby text link and figure markup.
//!
//! Built for moving blog posts out of an HTML export: headers, emphasis,
//! lists, code and blockquotes become Markdown, while links and images use
//! Kirby's `(link: …)` and `(image: …)` tags.
//!
//! ## Design
//!
//! The converter walks the tree bottom-up: every node's children are turned
//! into Markdown first, and the node's rule then sees that Markdown as its
//! content. Tags without a Markdown equivalent are kept as HTML, or reduced
//! to their text when `strip_tags` is set.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use kirbydown::{convert, ConversionOptions};
//!
//! let html = r#"<p>See <a href="https://getkirby.com">Kirby</a></p>"#;
//! let markdown = convert(html, &ConversionOptions::default()).unwrap();
//! assert_eq!(markdown, "See (link: https://getkirby.com text: Kirby)");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use kirbydown::{Converter, Document, Node};
//!
//! let mut body = Node::element("body");
//! let mut h3 = Node::element("h3");
//! h3.add_child(Node::text("Hello World"));
//! body.add_child(h3);
//!
//! let markdown = Converter::new()
//!     .convert_document(&Document::new(vec![body]))
//!     .unwrap();
//! assert_eq!(markdown, "### Hello World");
//! ```

mod assemble;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::{parse_document, strip_inter_tag_whitespace, ParsedDocument};
pub use node::{Document, Element, Node, NodeRef};
pub use options::{ConversionOptions, HeaderStyle};
pub use rules::TagKind;
#[cfg(feature = "html")]
pub use service::convert;
pub use service::{Conversion, Converter, ParseDiagnostic, MAX_NESTING_DEPTH};

/// Error type for kirbydown operations
#[derive(Debug, thiserror::Error)]
pub enum KirbydownError {
    #[error("no <body> or <head> element to convert")]
    NoRootElement,

    #[error("elements nested {depth} deep, the limit is {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, KirbydownError>;
