//! `sitecheck files` – verify that every required site file exists.

use anyhow::{Context, Result};
use sitecheck_core::audit;
use sitecheck_core::config::SiteConfig;
use std::io::{self, Write};
use std::path::Path;

/// Audit the required-files inventory under the site root and print the
/// report. Missing files do not change the exit status.
pub fn run_files(cfg: &SiteConfig, root: Option<&Path>) -> Result<()> {
    let root = root.unwrap_or(Path::new("."));
    let required = cfg.required_files();
    let report = audit::audit_files(root, &required);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .context("failed to write audit report")?;
    out.flush()?;
    Ok(())
}
