//! Required-files audit: verify that every file the deployed site must ship
//! actually exists under the site root.

use std::io;
use std::path::Path;

/// Result of one audit sweep, in inventory order.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub required: Vec<String>,
    pub missing: Vec<String>,
}

impl AuditReport {
    pub fn total(&self) -> usize {
        self.required.len()
    }

    /// Render the audit in the same line format as the link report.
    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        for file in &self.required {
            if self.missing.contains(file) {
                writeln!(out, "✗ {file} (missing)")?;
            } else {
                writeln!(out, "✓ {file}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Total files checked: {}", self.total())?;
        writeln!(out, "Missing files: {}", self.missing.len())?;
        if self.missing.is_empty() {
            writeln!(out, "All required files are present.")?;
        } else {
            for file in &self.missing {
                writeln!(out, "  - {file}")?;
            }
        }
        Ok(())
    }
}

/// Sweep the inventory against `root`. Only existing regular files count;
/// a directory with the same name does not satisfy the inventory.
pub fn audit_files(root: &Path, required: &[impl AsRef<str>]) -> AuditReport {
    let required: Vec<String> = required.iter().map(|f| f.as_ref().to_string()).collect();
    let missing = required
        .iter()
        .filter(|file| !root.join(file.as_str()).is_file())
        .cloned()
        .collect();
    AuditReport { required, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn render(report: &AuditReport) -> String {
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn complete_inventory_passes() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "x").unwrap();
        fs::write(temp.path().join("styles.css"), "x").unwrap();

        let report = audit_files(temp.path(), &["index.html", "styles.css"]);
        assert!(report.missing.is_empty());

        let text = render(&report);
        assert!(text.contains("Total files checked: 2"));
        assert!(text.contains("Missing files: 0"));
        assert!(text.contains("All required files are present."));
    }

    #[test]
    fn missing_entries_are_listed_in_order() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "x").unwrap();

        let report = audit_files(temp.path(), &["index.html", "styles.css", "script.js"]);
        assert_eq!(report.missing, vec!["styles.css", "script.js"]);

        let text = render(&report);
        assert!(text.contains("✗ styles.css (missing)"));
        assert!(text.contains("  - script.js"));
        assert!(!text.contains("All required files are present."));
    }

    #[test]
    fn directory_does_not_satisfy_a_file_entry() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("index.html")).unwrap();

        let report = audit_files(temp.path(), &["index.html"]);
        assert_eq!(report.missing, vec!["index.html"]);
    }
}
