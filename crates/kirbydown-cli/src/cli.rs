use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kirbydown::HeaderStyle;

/// Convert HTML to Markdown with Kirby text links and figures
#[derive(Debug, Parser)]
#[command(name = "kirbydown", version, about)]
pub struct Cli {
    /// HTML file to convert; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Write Markdown here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with conversion options; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Style for h1 and h2
    #[arg(long, value_enum)]
    pub header_style: Option<HeaderStyleArg>,

    /// Drop tags without a Markdown equivalent, keeping their text
    #[arg(long)]
    pub strip_tags: bool,

    /// Wrapper for strong/b
    #[arg(long)]
    pub bold_style: Option<String>,

    /// Wrapper for em/i
    #[arg(long)]
    pub italic_style: Option<String>,

    /// Print the parser's malformed-markup warnings to stderr
    #[arg(long)]
    pub show_parse_errors: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeaderStyleArg {
    Setext,
    Atx,
}

impl From<HeaderStyleArg> for HeaderStyle {
    fn from(value: HeaderStyleArg) -> Self {
        match value {
            HeaderStyleArg::Setext => HeaderStyle::Setext,
            HeaderStyleArg::Atx => HeaderStyle::Atx,
        }
    }
}
