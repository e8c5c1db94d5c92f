// src/seo/structured_data.rs
// =============================================================================
// schema.org linked data for search engines (JSON-LD).
//
// One @graph with three nodes that reference each other by @id:
//   WebPage --isPartOf--> WebSite --publisher--> Person
// =============================================================================

use serde_json::{json, Value};

use crate::config::Config;

// Builds the JSON-LD document embedded in the page head
pub fn structured_data(config: &Config) -> Value {
    let base = config.base_url();
    let site = &config.site;
    let profile = &config.profile;

    let page_id = format!("{}/#webpage", base);
    let website_id = format!("{}/#website", base);
    let person_id = format!("{}/#person", base);
    let image_url = format!("{}/{}", base, profile.image.trim_start_matches('/'));

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "WebPage",
                "@id": page_id,
                "url": format!("{}/", base),
                "name": site.name,
                "isPartOf": { "@id": website_id },
                "primaryImageOfPage": { "@id": image_url },
                "datePublished": profile.published,
                "dateModified": profile.published,
                "description": site.description,
            },
            {
                "@type": "WebSite",
                "@id": website_id,
                "url": format!("{}/", base),
                "name": format!("{} Portfolio", profile.name),
                "description": format!("{} Portfolio", profile.job_title),
                "publisher": { "@id": person_id },
                "inLanguage": "en-US",
            },
            {
                "@type": "Person",
                "@id": person_id,
                "name": profile.name,
                "jobTitle": profile.job_title,
                "image": {
                    "@type": "ImageObject",
                    "@id": image_url,
                    "url": image_url,
                    "caption": format!("{} - {}", profile.name, profile.job_title),
                },
                "description": profile.description,
                "sameAs": profile.same_as,
            }
        ]
    })
}
