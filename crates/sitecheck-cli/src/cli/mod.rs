//! CLI for the sitecheck maintenance tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sitecheck_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_files, run_links};

/// Top-level CLI for the sitecheck maintenance tool.
#[derive(Debug, Parser)]
#[command(name = "sitecheck")]
#[command(about = "sitecheck: link and inventory checks for the static website", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate internal links across the site pages.
    Links {
        /// Site root directory (defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Verify that every required site file exists.
    Files {
        /// Site root directory (defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Generate a shell completion script on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Links { root } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_links(&cfg, root.as_deref())?;
            }
            CliCommand::Files { root } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_files(&cfg, root.as_deref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
