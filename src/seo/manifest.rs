// src/seo/manifest.rs
// =============================================================================
// The web app manifest (manifest.webmanifest).
// =============================================================================

use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: Display,
    pub background_color: String,
    pub theme_color: String,
    pub lang: String,
    pub scope: String,
    pub icons: Vec<Icon>,
    pub categories: Vec<String>,
    pub screenshots: Vec<Screenshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screenshot {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub form_factor: FormFactor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Wide,
    Narrow,
}

fn png_icon(src: &str, size: u32, purpose: Option<&str>) -> Icon {
    Icon {
        src: src.to_string(),
        sizes: format!("{size}x{size}"),
        mime_type: "image/png".to_string(),
        purpose: purpose.map(str::to_string),
    }
}

fn png_screenshot(src: &str, sizes: &str, form_factor: FormFactor) -> Screenshot {
    Screenshot {
        src: src.to_string(),
        sizes: sizes.to_string(),
        mime_type: "image/png".to_string(),
        form_factor,
    }
}

impl Manifest {
    pub fn from_config(config: &Config) -> Self {
        let site = &config.site;

        Manifest {
            name: site.name.clone(),
            short_name: site.short_name.clone(),
            description: site.description.clone(),
            start_url: "/".to_string(),
            display: Display::Standalone,
            background_color: site.background_color.clone(),
            theme_color: site.theme_color.clone(),
            lang: site.lang.clone(),
            scope: "/".to_string(),
            icons: vec![
                png_icon("/android-chrome-192x192.png", 192, Some("any maskable")),
                png_icon("/android-chrome-512x512.png", 512, Some("any maskable")),
                png_icon("/apple-touch-icon.png", 180, None),
                png_icon("/favicon-32x32.png", 32, None),
                png_icon("/favicon-16x16.png", 16, None),
            ],
            categories: vec![
                "business".to_string(),
                "productivity".to_string(),
                "portfolio".to_string(),
            ],
            screenshots: vec![
                png_screenshot("/screenshot-desktop.png", "1280x720", FormFactor::Wide),
                png_screenshot("/screenshot-mobile.png", "375x812", FormFactor::Narrow),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_json_shape() {
        let manifest = Manifest::from_config(&Config::default());
        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(value["display"], "standalone");
        assert_eq!(value["start_url"], "/");
        assert_eq!(value["theme_color"], "#2563eb");
        assert_eq!(value["icons"].as_array().unwrap().len(), 5);
        assert_eq!(value["icons"][0]["type"], "image/png");
        assert_eq!(value["icons"][0]["sizes"], "192x192");
        assert_eq!(value["icons"][0]["purpose"], "any maskable");
        // Icons without a purpose omit the key entirely
        assert!(value["icons"][2].get("purpose").is_none());
        assert_eq!(value["screenshots"][1]["form_factor"], "narrow");
        assert_eq!(value["categories"][2], "portfolio");
    }
}
