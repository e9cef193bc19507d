//! Filesystem resolution for link targets.

use std::path::Path;

/// Decide whether `target` resolves under `root`.
///
/// After stripping one leading `/`, a target resolves if it names an existing
/// regular file, or an existing directory containing a file named
/// `index_name`. Everything else is broken. Relative segments such as `../`
/// are not normalized; the path is joined and handed to the filesystem as
/// written.
pub fn resolve_target(root: &Path, target: &str, index_name: &str) -> bool {
    let target = target.strip_prefix('/').unwrap_or(target);
    let path = root.join(target);
    if path.is_file() {
        return true;
    }
    if path.is_dir() {
        return path.join(index_name).is_file();
    }
    false
}
