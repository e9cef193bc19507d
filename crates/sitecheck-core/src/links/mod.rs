//! Link validation: extract internal href targets from the site pages and
//! resolve each unique (target, source) pair against the filesystem.

mod extract;
mod resolve;

pub use extract::extract_links;
pub use resolve::resolve_target;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Printed verbatim when no link is broken. An external harness greps stdout
/// for this exact sentence, so it must never be reworded.
pub const SUCCESS_PHRASE: &str = "All links are valid!";

/// A unique (target path, source page) pair found in the site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LinkRef {
    pub target: String,
    pub source: String,
}

impl LinkRef {
    pub fn new(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
        }
    }
}

/// Outcome of resolving one link reference.
#[derive(Debug, Clone)]
pub struct LinkCheck {
    pub link: LinkRef,
    pub resolvable: bool,
}

/// Error for a page that exists but cannot be read. Missing pages are not
/// errors; they are skipped with a warning during collection.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read page {page}")]
    Read {
        page: String,
        #[source]
        source: io::Error,
    },
}

/// Read every configured page under `root` and accumulate its internal link
/// references into one ordered set. Duplicate (target, source) pairs collapse
/// here; a page that does not exist contributes zero references.
pub fn collect_links(
    root: &Path,
    pages: &[impl AsRef<str>],
) -> Result<BTreeSet<LinkRef>, PageError> {
    let mut refs = BTreeSet::new();
    for page in pages {
        let page = page.as_ref();
        let path = root.join(page);
        if !path.exists() {
            tracing::warn!("page not found, skipping: {page}");
            continue;
        }
        let html = fs::read_to_string(&path).map_err(|source| PageError::Read {
            page: page.to_string(),
            source,
        })?;
        refs.extend(extract_links(&html, page));
    }
    Ok(refs)
}

/// Result of a full validation sweep. Owned by the run that produced it;
/// nothing is retained between runs.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub checks: Vec<LinkCheck>,
}

impl LinkReport {
    /// Number of unique links resolved.
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// The broken pairs, in check order.
    pub fn broken(&self) -> Vec<&LinkRef> {
        self.checks
            .iter()
            .filter(|check| !check.resolvable)
            .map(|check| &check.link)
            .collect()
    }

    /// Render the line-oriented report: one status line per pair, then the
    /// summary block and either the broken list or the success sentence.
    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        for check in &self.checks {
            let glyph = if check.resolvable { '✓' } else { '✗' };
            writeln!(out, "{glyph} {} (in {})", check.link.target, check.link.source)?;
        }

        let broken = self.broken();
        writeln!(out)?;
        writeln!(out, "Total links checked: {}", self.total())?;
        writeln!(out, "Broken links: {}", broken.len())?;
        if broken.is_empty() {
            writeln!(out, "{SUCCESS_PHRASE}")?;
        } else {
            for link in broken {
                writeln!(out, "  - {} (in {})", link.target, link.source)?;
            }
        }
        Ok(())
    }
}

/// Full pipeline: collect unique references across `pages`, then resolve each
/// exactly once against `root`.
pub fn validate(
    root: &Path,
    pages: &[impl AsRef<str>],
    index_name: &str,
) -> Result<LinkReport, PageError> {
    let refs = collect_links(root, pages)?;
    let checks = refs
        .into_iter()
        .map(|link| {
            let resolvable = resolve_target(root, &link.target, index_name);
            LinkCheck { link, resolvable }
        })
        .collect();
    Ok(LinkReport { checks })
}
