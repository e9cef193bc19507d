use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::manifest;

fn default_index_name() -> String {
    manifest::DEFAULT_INDEX.to_string()
}

/// Global configuration loaded from `~/.config/sitecheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Default document looked up when a link target names a directory.
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Optional override of the built-in page list scanned for links.
    #[serde(default)]
    pub pages: Option<Vec<String>>,
    /// Optional override of the built-in required-files inventory.
    #[serde(default)]
    pub required_files: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_name: default_index_name(),
            pages: None,
            required_files: None,
        }
    }
}

impl SiteConfig {
    /// Pages to scan: the configured override, or the built-in site manifest.
    pub fn pages(&self) -> Vec<String> {
        match &self.pages {
            Some(pages) => pages.clone(),
            None => manifest::SITE_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Inventory to audit: the configured override, or the built-in one.
    pub fn required_files(&self) -> Vec<String> {
        match &self.required_files {
            Some(files) => files.clone(),
            None => manifest::required_files()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.index_name, "index.html");
        assert!(cfg.pages.is_none());
        assert!(cfg.required_files.is_none());
        assert_eq!(cfg.pages(), manifest::SITE_PAGES.to_vec());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.index_name, cfg.index_name);
        assert_eq!(parsed.pages, cfg.pages);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.index_name, "index.html");
        assert!(cfg.pages.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            index_name = "default.html"
            pages = ["home.html", "about.html"]
        "#;
        let cfg: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.index_name, "default.html");
        assert_eq!(cfg.pages(), vec!["home.html", "about.html"]);
        // Unset sections fall back to the built-in inventory.
        assert!(cfg.required_files().contains(&"styles.css".to_string()));
    }
}
