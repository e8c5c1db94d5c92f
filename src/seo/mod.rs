// src/seo/mod.rs
// =============================================================================
// This module produces the static SEO files of the site.
//
// Submodules:
// - manifest: manifest.webmanifest
// - robots: robots.txt
// - sitemap: sitemap.xml
// - structured_data: schema.org JSON-LD
//
// The artifacts are plain data derived from Config. They are built once per
// run (SeoArtifacts::build) and then printed or written to disk.
// =============================================================================

mod manifest;
mod robots;
mod sitemap;
mod structured_data;

pub use manifest::Manifest;
pub use robots::Robots;
pub use sitemap::{render_sitemap, sitemap_entries, SitemapEntry};
pub use structured_data::structured_data;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Everything the site publishes besides the page itself
#[derive(Debug, Clone)]
pub struct SeoArtifacts {
    pub manifest: Manifest,
    pub robots: Robots,
    pub sitemap: Vec<SitemapEntry>,
    pub structured_data: serde_json::Value,
}

impl SeoArtifacts {
    pub fn build(config: &Config, generated_at: DateTime<Utc>) -> Self {
        Self {
            manifest: Manifest::from_config(config),
            robots: Robots::from_config(config),
            sitemap: sitemap_entries(config, generated_at),
            structured_data: structured_data(config),
        }
    }

    pub fn manifest_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.manifest)?)
    }

    pub fn robots_txt(&self) -> String {
        self.robots.render()
    }

    pub fn sitemap_xml(&self) -> String {
        render_sitemap(&self.sitemap)
    }

    pub fn structured_data_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.structured_data)?)
    }

    // Writes every artifact into `out_dir`, creating it if needed
    //
    // Returns: the paths written, in a stable order
    pub fn write_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Can't create output directory '{}'", out_dir.display()))?;

        let files = [
            ("manifest.webmanifest", self.manifest_json()?),
            ("robots.txt", self.robots_txt()),
            ("sitemap.xml", self.sitemap_xml()),
            ("structured-data.json", self.structured_data_json()?),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, contents) in files {
            let path = out_dir.join(name);
            fs::write(&path, contents)
                .with_context(|| format!("Can't write '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote artifact");
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public");

        let artifacts = SeoArtifacts::build(&Config::default(), Utc::now());
        let written = artifacts.write_all(&out).unwrap();

        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|p| p.exists()));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Disallow: /api/"));

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("manifest.webmanifest")).unwrap())
                .unwrap();
        assert_eq!(manifest["short_name"], "Aadesh Gulumbe");
    }
}
