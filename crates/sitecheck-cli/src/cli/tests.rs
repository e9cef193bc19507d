//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_links() {
    match parse(&["sitecheck", "links"]) {
        CliCommand::Links { root } => assert!(root.is_none()),
        _ => panic!("expected Links"),
    }
}

#[test]
fn cli_parse_links_root() {
    match parse(&["sitecheck", "links", "--root", "/srv/www"]) {
        CliCommand::Links { root } => {
            assert_eq!(root.as_deref(), Some(std::path::Path::new("/srv/www")));
        }
        _ => panic!("expected Links with --root"),
    }
}

#[test]
fn cli_parse_files() {
    match parse(&["sitecheck", "files"]) {
        CliCommand::Files { root } => assert!(root.is_none()),
        _ => panic!("expected Files"),
    }
}

#[test]
fn cli_parse_files_root() {
    match parse(&["sitecheck", "files", "--root", "site"]) {
        CliCommand::Files { root } => {
            assert_eq!(root.as_deref(), Some(std::path::Path::new("site")));
        }
        _ => panic!("expected Files with --root"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["sitecheck", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["sitecheck"]).is_err());
}
