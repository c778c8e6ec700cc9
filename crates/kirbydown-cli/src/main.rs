mod cli;

use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use eyre::WrapErr;
use kirbydown::{ConversionOptions, Converter};

use crate::cli::Cli;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = load_options(&cli)?;
    let html = read_input(cli.input.as_deref())?;

    let conversion = Converter::with_options(options)
        .convert_with_diagnostics(&html)
        .wrap_err("conversion failed")?;

    for diagnostic in &conversion.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let mut markdown = conversion.markdown;
    if !markdown.ends_with('\n') {
        markdown.push('\n');
    }

    match &cli.output {
        Some(path) => fs::write(path, markdown)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(markdown.as_bytes())?,
    }

    Ok(())
}

/// Options from the config file, with command-line flags on top
fn load_options(cli: &Cli) -> eyre::Result<ConversionOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&raw)
                .wrap_err_with(|| format!("invalid config {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };

    if let Some(style) = cli.header_style {
        options.header_style = style.into();
    }
    if cli.strip_tags {
        options.strip_tags = true;
    }
    if cli.show_parse_errors {
        options.suppress_parse_errors = false;
    }
    if let Some(bold) = &cli.bold_style {
        options.bold_style = bold.clone();
    }
    if let Some(italic) = &cli.italic_style {
        options.italic_style = italic.clone();
    }

    tracing::debug!(?options, "resolved options");
    Ok(options)
}

fn read_input(input: Option<&std::path::Path>) -> eyre::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .wrap_err("failed to read stdin")?;
            Ok(html)
        }
    }
}
