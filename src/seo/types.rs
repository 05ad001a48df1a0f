// src/seo/types.rs
//! Serialized shapes of every generated artifact. All structs are built once
//! per run and never mutated; serde attributes carry the output contract.

use serde::{Deserialize, Serialize};

/// Machine-readable broadcast state, a pure function of
/// `(starts_at, ends_at, now)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Live,
    Completed,
}

impl EventStatus {
    pub fn from_window(starts_at: i64, ends_at: i64, now: i64) -> Self {
        if now < starts_at {
            EventStatus::Upcoming
        } else if now <= ends_at {
            EventStatus::Live
        } else {
            EventStatus::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Live => "live",
            EventStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

// ---- Event document ----

#[derive(Debug, Clone, Serialize)]
pub struct EventMetadata {
    pub id: u64,
    pub slug: String,
    pub uri_name: String,
    pub canonical_url: String,
    pub meta: MetaTags,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
    pub schema: SportsEventSchema,
    pub seo: SeoBlocks,
    pub event: EventFacts,
    pub technical: CrawlHints,
    pub bing: BingHints,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub robots: String,
    pub viewport: String,
    pub language: String,
    pub locale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub url: String,
    pub image: String,
    pub site_name: String,
    pub locale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub site: String,
}

/// JSON-LD `SportsEvent` graph. The head-to-head branch must be entirely
/// absent for single-entity events, hence the skips.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsEventSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub event_status: String,
    pub event_attendance_mode: String,
    pub location: VirtualLocation,
    pub organizer: Organizer,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competitor: Vec<SportsTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<SportsTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<SportsTeam>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VirtualLocation {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Organizer {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SportsTeam {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
}

impl SportsTeam {
    pub fn named(name: &str) -> Self {
        Self {
            schema_type: "SportsTeam".to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoBlocks {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub h1: String,
    pub h2: String,
    pub faq: Vec<FaqEntry>,
    pub content_blocks: ContentBlocks,
}

#[derive(Debug, Clone, Serialize)]
pub struct Breadcrumb {
    pub position: u32,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentBlocks {
    pub intro: String,
    pub description: String,
}

/// Normalized event facts. `status` keeps the machine vocabulary; the
/// localized display string travels separately in `status_label`.
#[derive(Debug, Clone, Serialize)]
pub struct EventFacts {
    pub name: String,
    pub category: String,
    pub category_slug: String,
    pub tag: String,
    pub poster: String,
    pub starts_at: String,
    pub ends_at: String,
    pub date: String,
    pub date_short: String,
    pub time: String,
    pub status: EventStatus,
    pub status_label: String,
    pub duration_minutes: i64,
    pub viewers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlHints {
    pub priority: f32,
    pub changefreq: ChangeFreq,
    pub canonical: String,
    pub alternates: Vec<AlternateLocale>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternateLocale {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BingHints {
    pub market: String,
    pub keywords: Vec<String>,
}

// ---- Category document ----

#[derive(Debug, Clone, Serialize)]
pub struct CategoryMetadata {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub slug: String,
    pub url: String,
    pub event_count: usize,
    pub always_live: bool,
    pub meta: MetaTags,
    pub schema: CollectionPageSchema,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionPageSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

// ---- Sitemap / summary / keywords artifacts ----

#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetadataDocument {
    pub generated_at: String,
    pub total_events: usize,
    pub categories: Vec<CategoryMetadata>,
    pub events: Vec<EventMetadata>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordsDocument {
    pub primary_keywords: Vec<String>,
    pub total_keywords: usize,
    pub target_audience: String,
    pub target_search_engines: Vec<String>,
    pub language: String,
    pub generated_at: String,
}
