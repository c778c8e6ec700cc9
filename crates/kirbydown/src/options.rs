//! Configuration options for conversion

use serde::{Deserialize, Serialize};

use crate::{KirbydownError, Result};

/// Header style for h1 and h2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Underline with = or -
    /// Only applies to h1 and h2 outside blockquotes
    #[default]
    Setext,
    /// Prefix with # or ##
    Atx,
}

impl std::str::FromStr for HeaderStyle {
    type Err = KirbydownError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "setext" => Ok(HeaderStyle::Setext),
            "atx" => Ok(HeaderStyle::Atx),
            other => Err(KirbydownError::InvalidOption {
                name: "header_style".to_string(),
                reason: format!("expected \"setext\" or \"atx\", got {other:?}"),
            }),
        }
    }
}

/// Options for a conversion.
///
/// Deserializing a partial table fills the missing fields from [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Header style for h1 and h2
    pub header_style: HeaderStyle,

    /// Drop the parser's malformed-markup diagnostics instead of reporting them
    pub suppress_parse_errors: bool,

    /// Strip tags that have no Markdown equivalent, keeping their text.
    /// When off, such tags are kept as HTML.
    pub strip_tags: bool,

    /// Wrapper for strong/b
    pub bold_style: String,

    /// Wrapper for em/i
    pub italic_style: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Setext,
            suppress_parse_errors: true,
            strip_tags: false,
            bold_style: "**".to_string(),
            italic_style: "*".to_string(),
        }
    }
}

impl ConversionOptions {
    /// Set a single option by name from its string form
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "header_style" => self.header_style = value.parse()?,
            "suppress_parse_errors" => self.suppress_parse_errors = parse_bool(name, value)?,
            "strip_tags" => self.strip_tags = parse_bool(name, value)?,
            "bold_style" => self.bold_style = value.to_string(),
            "italic_style" => self.italic_style = value.to_string(),
            _ => {
                return Err(KirbydownError::InvalidOption {
                    name: name.to_string(),
                    reason: "unknown option".to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(KirbydownError::InvalidOption {
            name: name.to_string(),
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}
