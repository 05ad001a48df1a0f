// src/seo/sitemap.rs
//! Sitemap entries (home, then categories, then events) and the standalone
//! keywords artifact.

use crate::config::{SiteConfig, PRIMARY_KEYWORDS};
use crate::seo::types::*;

pub fn build_sitemap(
    categories: &[CategoryMetadata],
    events: &[EventMetadata],
    cfg: &SiteConfig,
    generated_at: &str,
) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(1 + categories.len() + events.len());

    entries.push(SitemapEntry {
        loc: cfg.domain.clone(),
        lastmod: generated_at.to_string(),
        changefreq: ChangeFreq::Daily,
        priority: 1.0,
    });

    for category in categories {
        entries.push(SitemapEntry {
            loc: category.url.clone(),
            lastmod: generated_at.to_string(),
            changefreq: ChangeFreq::Hourly,
            priority: 0.9,
        });
    }

    for event in events {
        entries.push(SitemapEntry {
            loc: event.canonical_url.clone(),
            lastmod: generated_at.to_string(),
            changefreq: event.technical.changefreq,
            priority: event.technical.priority,
        });
    }

    entries
}

pub fn build_keywords_document(cfg: &SiteConfig, generated_at: &str) -> KeywordsDocument {
    KeywordsDocument {
        primary_keywords: PRIMARY_KEYWORDS.clone(),
        total_keywords: PRIMARY_KEYWORDS.len(),
        target_audience: "España y Latinoamérica".to_string(),
        target_search_engines: vec!["Google".to_string(), "Bing".to_string()],
        language: cfg.language.clone(),
        generated_at: generated_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{build_category, build_event};
    use crate::source::{SourceCategory, SourceStream};

    fn fixture() -> (SourceCategory, SiteConfig) {
        let category = SourceCategory {
            id: 3,
            category: "Football".to_string(),
            always_live: false,
            streams: vec![SourceStream {
                id: 1,
                name: "Real Madrid vs. Barcelona".to_string(),
                tag: "ESPN".to_string(),
                poster: "http://x/p.jpg".to_string(),
                uri_name: "rm-vs-barca".to_string(),
                starts_at: 1_700_000_000,
                ends_at: 1_700_007_200,
                category_name: "Football".to_string(),
                viewers: None,
                always_live: None,
            }],
        };
        (category, SiteConfig::default())
    }

    #[test]
    fn ordering_is_home_then_categories_then_events() {
        let (category, cfg) = fixture();
        let cat_doc = build_category(&category, &cfg);
        let event_doc = build_event(&category.streams[0], &category, &cfg, 0);

        let entries = build_sitemap(
            std::slice::from_ref(&cat_doc),
            std::slice::from_ref(&event_doc),
            &cfg,
            "2023-11-14T22:13:20Z",
        );

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].loc, cfg.domain);
        assert_eq!(entries[0].priority, 1.0);
        assert!(matches!(entries[0].changefreq, ChangeFreq::Daily));
        assert_eq!(entries[1].loc, cat_doc.url);
        assert_eq!(entries[1].priority, 0.9);
        // event entry carries the event's own computed crawl hints
        assert_eq!(entries[2].loc, event_doc.canonical_url);
        assert_eq!(entries[2].priority, event_doc.technical.priority);
        assert!(entries.iter().all(|e| e.lastmod == "2023-11-14T22:13:20Z"));
    }

    #[test]
    fn keywords_document_mirrors_the_primary_list() {
        let (_, cfg) = fixture();
        let doc = build_keywords_document(&cfg, "2023-11-14T22:13:20Z");
        assert_eq!(doc.total_keywords, doc.primary_keywords.len());
        assert_eq!(doc.language, "es");
        assert_eq!(doc.target_search_engines, vec!["Google", "Bing"]);
    }
}
