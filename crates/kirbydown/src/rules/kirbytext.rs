//! Markdown rules with Kirby text link and figure markup.
//!
//! Each rule receives the node's content, already converted, and returns the
//! Markdown that replaces the node.

use crate::node::NodeRef;
use crate::options::{ConversionOptions, HeaderStyle};
use crate::utilities::{
    attribute_or_empty, collapse_whitespace, decode_entities, repeat, split_lines, trim, trim_end,
};

/// Carriage return left behind as a literal character reference
const CR_ARTIFACT: &str = "&#xD;";

pub fn text(content: &str) -> String {
    collapse_whitespace(content).into_owned()
}

pub fn paragraph(content: &str) -> String {
    if trim(content).is_empty() {
        return String::new();
    }
    format!("{}\n\n", trim_end(content))
}

/// h1 and h2. Inside a blockquote the underline would lose its `> ` prefix,
/// so those always use ATX.
pub fn setext_heading(
    node: &NodeRef,
    level: u8,
    content: &str,
    options: &ConversionOptions,
) -> String {
    if options.header_style == HeaderStyle::Setext && !node.is_descendant_of("blockquote") {
        let underline = if level == 1 { "=" } else { "-" };
        format!(
            "{}\n{}\n\n",
            content,
            repeat(underline, content.chars().count())
        )
    } else {
        atx_heading(level, content)
    }
}

pub fn atx_heading(level: u8, content: &str) -> String {
    format!("{} {}\n\n", repeat("#", level as usize), content)
}

pub fn wrap(content: &str, delimiter: &str) -> String {
    format!("{}{}{}", delimiter, content, delimiter)
}

pub fn horizontal_rule() -> String {
    "- - - - - -\n\n".to_string()
}

pub fn line_break() -> String {
    "  \n".to_string()
}

pub fn blockquote(content: &str) -> String {
    let mut markdown = String::new();
    for line in split_lines(trim(content)) {
        markdown.push_str("> ");
        markdown.push_str(line);
        markdown.push('\n');
    }
    markdown.push('\n');
    markdown
}

/// Multi-line code becomes an indented block, a single line an inline span.
///
/// `content` is the canonical markup of the element's children; nothing
/// inside `code` has been converted.
pub fn code(node: &NodeRef, content: &str) -> String {
    let Some(element) = node.node.as_element() else {
        return String::new();
    };

    let markup = decode_entities(&element.canonical_wrap(content))
        .replace("<code>", "")
        .replace("</code>", "");
    let mut lines = split_lines(&markup);

    if lines.len() == 1 {
        return format!("`{}`", lines[0]);
    }

    if lines.first().is_some_and(|line| is_blank_code_line(line)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| is_blank_code_line(line)) {
        lines.pop();
    }

    let mut markdown = lines
        .iter()
        .map(|line| format!("    {}", line.replace(CR_ARTIFACT, "")))
        .collect::<Vec<_>>()
        .join("\n");
    markdown.push('\n');
    markdown
}

fn is_blank_code_line(line: &str) -> bool {
    trim(&line.replace(CR_ARTIFACT, "")).is_empty()
}

pub fn list(content: &str) -> String {
    format!("{}\n", content)
}

/// Bullets under `ul`; any other parent numbers the item by its position
/// among all of the parent's child nodes.
pub fn list_item(node: &NodeRef, content: &str) -> String {
    let prefix = if node.parent_tag() == Some("ul") {
        "- ".to_string()
    } else {
        format!("{}. ", node.position())
    };
    format!("{}{}\n", prefix, trim(content))
}

/// `<figure>` block with a Kirby `(image: …)` tag. The title attribute is not rendered.
pub fn image(node: &NodeRef) -> String {
    let src = attribute_or_empty(node.attr("src"));
    let alt = attribute_or_empty(node.attr("alt"));

    format!(
        "<figure>\n(image: {} alt: {})\n<figcaption>{}</figcaption>\n</figure>\n\n",
        src, alt, alt
    )
}

/// Kirby `(link: …)` tag. A following anchor sibling gets a separating space.
pub fn anchor(node: &NodeRef, content: &str) -> String {
    let href = attribute_or_empty(node.attr("href"));
    let title = attribute_or_empty(node.attr("title"));

    let mut markdown = if title.is_empty() {
        format!("(link: {} text: {})", href, content)
    } else {
        format!(
            "(link: {} text: {} popup: true title: {})",
            href, content, title
        )
    };

    if node.next_sibling().and_then(|n| n.tag_name()) == Some("a") {
        markdown.push(' ');
    }

    markdown
}
