// src/seo/category.rs
//! Category-level metadata: `meta` + a `CollectionPage` schema.

use crate::config::{SiteConfig, KEYWORD_HEAD_N, PRIMARY_KEYWORDS};
use crate::locale;
use crate::seo::types::*;
use crate::slug::slugify;
use crate::source::SourceCategory;

pub fn build_category(category: &SourceCategory, cfg: &SiteConfig) -> CategoryMetadata {
    let display_name = locale::translate_category(&category.category);
    // The document key stays on the source name; URLs use the localized slug.
    let slug = slugify(&category.category);
    let url = format!("{}/categoria/{}", cfg.domain, slugify(&display_name));
    let event_count = category.streams.len();

    let title = format!(
        "{display_name} En Vivo - Partidos y Eventos de Hoy | {}",
        cfg.site_name
    );
    let description = format!(
        "{display_name} en directo gratis: {event_count} eventos en vivo hoy en {}. \
         Transmisiones en HD sin registro.",
        cfg.site_name
    );

    let mut keywords: Vec<String> = PRIMARY_KEYWORDS
        .iter()
        .take(KEYWORD_HEAD_N)
        .cloned()
        .collect();
    keywords.push(display_name.to_lowercase());
    keywords.push(category.category.to_lowercase());
    keywords.push(format!("{} en vivo", display_name.to_lowercase()));
    keywords.push(format!("{} en directo", display_name.to_lowercase()));

    CategoryMetadata {
        id: category.id,
        name: category.category.clone(),
        display_name: display_name.clone(),
        slug,
        url: url.clone(),
        event_count,
        always_live: category.always_live,
        meta: MetaTags {
            title,
            description: description.clone(),
            keywords,
            robots: "index, follow".to_string(),
            viewport: "width=device-width, initial-scale=1".to_string(),
            language: cfg.language.clone(),
            locale: cfg.locale.clone(),
        },
        schema: CollectionPageSchema {
            context: "https://schema.org".to_string(),
            schema_type: "CollectionPage".to_string(),
            name: format!("{display_name} en vivo"),
            description,
            url,
        },
    }
}
