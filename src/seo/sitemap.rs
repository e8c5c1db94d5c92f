// src/seo/sitemap.rs
// =============================================================================
// The sitemap (sitemap.xml): the home page and its in-page sections.
//
// All entries share one lastmod, the moment the artifacts were generated.
// =============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Write};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Section anchor, change frequency and priority, in sitemap order
const SECTIONS: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Weekly, 1.0),
    ("#about", ChangeFrequency::Monthly, 0.9),
    ("#experience", ChangeFrequency::Monthly, 0.8),
    ("#skills", ChangeFrequency::Monthly, 0.8),
    ("#projects", ChangeFrequency::Weekly, 0.9),
    ("#contact", ChangeFrequency::Monthly, 0.7),
];

pub fn sitemap_entries(config: &Config, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = config.base_url();

    SECTIONS
        .iter()
        .map(|&(anchor, change_frequency, priority)| SitemapEntry {
            url: format!("{}{}", base, anchor),
            last_modified: generated_at,
            change_frequency,
            priority,
        })
        .collect()
}

// Renders entries as a sitemaps.org urlset document
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "<url>\n\
             <loc>{}</loc>\n\
             <lastmod>{}</lastmod>\n\
             <changefreq>{}</changefreq>\n\
             <priority>{}</priority>\n\
             </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.change_frequency,
            entry.priority,
        );
    }

    out.push_str("</urlset>\n");
    out
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_entries_in_fixed_order() {
        let entries = sitemap_entries(&Config::default(), generated_at());

        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://aadeshgulumbe.live",
                "https://aadeshgulumbe.live#about",
                "https://aadeshgulumbe.live#experience",
                "https://aadeshgulumbe.live#skills",
                "https://aadeshgulumbe.live#projects",
                "https://aadeshgulumbe.live#contact",
            ]
        );
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[4].change_frequency, ChangeFrequency::Weekly);
        assert!(entries.iter().all(|e| e.last_modified == generated_at()));
    }

    #[test]
    fn test_render_xml() {
        let entries = sitemap_entries(&Config::default(), generated_at());
        let xml = render_sitemap(&entries[..2]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(
            "<url>\n<loc>https://aadeshgulumbe.live</loc>\n\
             <lastmod>2025-09-07T12:00:00.000Z</lastmod>\n\
             <changefreq>weekly</changefreq>\n\
             <priority>1</priority>\n</url>\n"
        ));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_loc_is_escaped() {
        let entry = SitemapEntry {
            url: "https://example.com/?a=1&b=<2>".to_string(),
            last_modified: generated_at(),
            change_frequency: ChangeFrequency::Never,
            priority: 0.5,
        };
        let xml = render_sitemap(&[entry]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
    }
}
