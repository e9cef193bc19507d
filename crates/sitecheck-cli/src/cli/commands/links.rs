//! `sitecheck links` – validate internal links across the site pages.

use anyhow::{Context, Result};
use sitecheck_core::config::SiteConfig;
use sitecheck_core::links;
use std::io::{self, Write};
use std::path::Path;

/// Run the link validator against the site root and print the report.
/// Broken links are a report outcome, not an error; the exit status stays 0.
pub fn run_links(cfg: &SiteConfig, root: Option<&Path>) -> Result<()> {
    let root = root.unwrap_or(Path::new("."));
    let pages = cfg.pages();
    let report = links::validate(root, &pages, &cfg.index_name)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .context("failed to write link report")?;
    out.flush()?;
    Ok(())
}
