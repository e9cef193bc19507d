//! href extraction over raw page text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LinkRef;

static HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());

/// Targets that leave the site: external URLs, in-page fragments, mail links.
/// Prefixes are matched case-sensitively.
fn is_external(target: &str) -> bool {
    target.starts_with("http") || target.starts_with('#') || target.starts_with("mailto:")
}

/// Scan one page's raw HTML for internal link targets.
///
/// Matching is textual, not a markup parse; the pages are small and
/// hand-authored. A single leading `/` is stripped from each recorded target
/// so absolute and relative spellings of the same path collapse together.
/// Duplicates are kept here; deduplication happens when references are
/// collected into the run's set.
pub fn extract_links(html: &str, source: &str) -> Vec<LinkRef> {
    HREF.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|target| !is_external(target))
        .map(|target| LinkRef::new(target.strip_prefix('/').unwrap_or(target), source))
        .collect()
}
