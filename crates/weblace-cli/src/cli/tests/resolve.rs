//! Tests for the resolve subcommand.

use super::parse;
use crate::cli::{CliCommand, PositionArg};
use std::path::Path;

#[test]
fn cli_parse_resolve_minimal() {
    match parse(&[
        "weblace",
        "resolve",
        "plan",
        "network.html",
        "--source",
        "web/network.html",
    ]) {
        CliCommand::Resolve {
            plugin,
            file_name,
            source,
            scripts,
            styles,
            at,
            out,
        } => {
            assert_eq!(plugin, "plan");
            assert_eq!(file_name, "network.html");
            assert_eq!(source, Path::new("web/network.html"));
            assert!(scripts.is_empty());
            assert!(styles.is_empty());
            assert_eq!(at, PositionArg::Head);
            assert!(out.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_with_snippets() {
    match parse(&[
        "weblace",
        "resolve",
        "plan",
        "network.html",
        "--source",
        "web/network.html",
        "--script",
        "a.js",
        "--script",
        "b.js",
        "--style",
        "main.css",
        "--at",
        "body-end",
    ]) {
        CliCommand::Resolve {
            scripts,
            styles,
            at,
            ..
        } => {
            assert_eq!(scripts, vec!["a.js", "b.js"]);
            assert_eq!(styles, vec!["main.css"]);
            assert_eq!(at, PositionArg::BodyEnd);
        }
        _ => panic!("expected Resolve with snippets"),
    }
}

#[test]
fn cli_parse_resolve_out_file() {
    match parse(&[
        "weblace",
        "resolve",
        "plan",
        "network.html",
        "--source",
        "web/network.html",
        "--out",
        "/tmp/out.html",
    ]) {
        CliCommand::Resolve { out, .. } => {
            assert_eq!(out.as_deref(), Some(Path::new("/tmp/out.html")));
        }
        _ => panic!("expected Resolve with --out"),
    }
}

#[test]
fn cli_resolve_requires_source() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["weblace", "resolve", "plan", "network.html"]).is_err());
}
