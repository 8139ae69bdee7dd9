//! Tests for the sanitize, overrides and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_sanitize() {
    match parse(&["weblace", "sanitize", "chat.txt"]) {
        CliCommand::Sanitize { path, colors } => {
            assert_eq!(path, Path::new("chat.txt"));
            assert!(!colors);
        }
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_sanitize_colors() {
    match parse(&["weblace", "sanitize", "chat.txt", "--colors"]) {
        CliCommand::Sanitize { colors, .. } => assert!(colors),
        _ => panic!("expected Sanitize with --colors"),
    }
}

#[test]
fn cli_parse_overrides() {
    assert!(matches!(
        parse(&["weblace", "overrides"]),
        CliCommand::Overrides
    ));
}

#[test]
fn cli_parse_completions() {
    match parse(&["weblace", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}
