//! Integration tests for the kirbydown CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kirbydown"))
}

#[test]
fn test_basic_stdin() {
    cli()
        .write_stdin("<h1>Title</h1><p>Content</p>")
        .assert()
        .success()
        .stdout("Title\n=====\n\nContent\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    fs::write(&input_path, r#"<p><a href="https://getkirby.com">Kirby</a></p>"#).unwrap();

    cli()
        .arg(&input_path)
        .assert()
        .success()
        .stdout("(link: https://getkirby.com text: Kirby)\n");
}

#[test]
fn test_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("article.txt");

    cli()
        .arg("-o")
        .arg(&output_path)
        .write_stdin("<p>Output test</p>")
        .assert()
        .success()
        .stdout("");

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "Output test\n");
}

#[test]
fn test_dash_reads_stdin() {
    cli()
        .arg("-")
        .write_stdin("<p>Dash test</p>")
        .assert()
        .success()
        .stdout("Dash test\n");
}

#[test]
fn test_flags() {
    cli()
        .args(["--header-style", "atx", "--bold-style", "__"])
        .write_stdin("<h2>Sub</h2><p><b>bold</b></p>")
        .assert()
        .success()
        .stdout("## Sub\n\n__bold__\n");
}

#[test]
fn test_strip_tags_flag() {
    cli()
        .arg("--strip-tags")
        .write_stdin(r#"<p><span style="color:red">plain</span></p>"#)
        .assert()
        .success()
        .stdout("plain\n");
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kirbydown.toml");
    fs::write(&config_path, "header_style = \"atx\"\nitalic_style = \"_\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["--italic-style", "*"])
        .write_stdin("<h1>Top</h1><p><em>it</em></p>")
        .assert()
        .success()
        .stdout("# Top\n\n*it*\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "header_style = \"underline\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_missing_input_file_fails() {
    cli()
        .arg("does-not-exist.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_show_parse_errors() {
    cli()
        .arg("--show-parse-errors")
        .write_stdin("<p>broken</i>")
        .assert()
        .success()
        .stdout("broken\n")
        .stderr(predicate::str::contains("warning:"));
}
