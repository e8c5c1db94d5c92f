// src/seo/robots.rs
// =============================================================================
// The robots policy (robots.txt).
// =============================================================================

use std::fmt::Write;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl Robots {
    pub fn from_config(config: &Config) -> Self {
        let base = config.base_url();

        Robots {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec!["/private/".to_string(), "/api/".to_string()],
            }],
            sitemap: format!("{}/sitemap.xml", base),
            host: base.to_string(),
        }
    }

    // Renders the robots.txt body
    pub fn render(&self) -> String {
        let mut out = String::new();

        for rule in &self.rules {
            // Writing into a String cannot fail
            let _ = writeln!(out, "User-Agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {}", path);
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {}", path);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Host: {}", self.host);
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_policy() {
        let robots = Robots::from_config(&Config::default());

        assert_eq!(
            robots.render(),
            "User-Agent: *\n\
             Allow: /\n\
             Disallow: /private/\n\
             Disallow: /api/\n\
             \n\
             Host: https://aadeshgulumbe.live\n\
             Sitemap: https://aadeshgulumbe.live/sitemap.xml\n"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let mut config = Config::default();
        config.site.base_url = "https://octocat.dev/".to_string();

        let robots = Robots::from_config(&config);
        assert_eq!(robots.sitemap, "https://octocat.dev/sitemap.xml");
        assert_eq!(robots.host, "https://octocat.dev");
    }
}
