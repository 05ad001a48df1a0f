// src/pipeline.rs
//! One-shot orchestration: fetch → validate shape → build every derived
//! document → hand the complete artifact set to the sink.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};

use crate::config::SiteConfig;
use crate::error::PipelineError;
use crate::fetch::CatalogueSource;
use crate::seo::types::{CategoryMetadata, EventMetadata, MetadataDocument};
use crate::seo::{build_category, build_event, build_keywords_document, build_sitemap};
use crate::source::{self, Catalogue};
use crate::write::ArtifactSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_categories: usize,
    pub total_events: usize,
    pub sitemap_entries: usize,
}

pub async fn run(
    cfg: &SiteConfig,
    source: &dyn CatalogueSource,
    sink: &dyn ArtifactSink,
) -> Result<RunSummary> {
    // 1) Fetch + parse; both failures are FetchFailure
    let raw = source
        .fetch()
        .await
        .map_err(PipelineError::Fetch)?;
    tracing::info!(source = source.name(), "catalogue fetched");

    // 2) Top-level shape, then the typed view
    source::validate_shape(&raw)?;
    let catalogue = Catalogue::from_value(raw)?;

    // 3) Derived documents
    let now = Utc::now().timestamp();
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut categories: Vec<CategoryMetadata> = Vec::with_capacity(catalogue.events.streams.len());
    let mut events: Vec<EventMetadata> = Vec::new();
    for category in &catalogue.events.streams {
        categories.push(build_category(category, cfg));
        for stream in &category.streams {
            events.push(build_event(stream, category, cfg, now));
        }
    }

    let sitemap = build_sitemap(&categories, &events, cfg, &generated_at);
    let keywords = build_keywords_document(cfg, &generated_at);
    let metadata = MetadataDocument {
        generated_at,
        total_events: events.len(),
        categories,
        events,
    };

    let summary = RunSummary {
        total_categories: metadata.categories.len(),
        total_events: metadata.total_events,
        sitemap_entries: sitemap.len(),
    };

    // 4) Serialize everything before the first write
    let items = vec![
        (
            cfg.metadata_path.clone(),
            serde_json::to_string_pretty(&metadata).context("serializing metadata document")?,
        ),
        (
            cfg.sitemap_path.clone(),
            serde_json::to_string_pretty(&sitemap).context("serializing sitemap entries")?,
        ),
        (
            cfg.keywords_path.clone(),
            serde_json::to_string_pretty(&keywords).context("serializing keywords document")?,
        ),
    ];
    sink.store(items).await.context("storing artifacts")?;

    tracing::info!(
        categories = summary.total_categories,
        events = summary.total_events,
        sitemap_entries = summary.sitemap_entries,
        "metadata generation complete"
    );
    Ok(summary)
}
