// src/config.rs
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "SITE_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config/site.toml";

/// Primary keyword list for the Spanish-speaking audience, shared by the
/// metadata builders and the standalone keywords artifact.
pub static PRIMARY_KEYWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    let raw = include_str!("../keywords_es.json");
    serde_json::from_str::<Vec<String>>(raw).expect("valid primary keyword list")
});

/// How many primary keywords are prepended to each event's keyword list.
pub const KEYWORD_HEAD_N: usize = 10;
/// Bing gets a shorter slice of the same list.
pub const BING_KEYWORD_N: usize = 8;

fn default_source_url() -> String {
    "https://old.ppv.to/api/streams".to_string()
}
fn default_domain() -> String {
    "https://eventosenvivo.live".to_string()
}
fn default_site_name() -> String {
    "Eventos En Vivo".to_string()
}
fn default_twitter_site() -> String {
    "@eventosenvivo".to_string()
}
fn default_language() -> String {
    "es".to_string()
}
fn default_locale() -> String {
    "es_ES".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    10
}
fn default_metadata_path() -> String {
    "seo_metadata.json".to_string()
}
fn default_sitemap_path() -> String {
    "sitemap_entries.json".to_string()
}
fn default_keywords_path() -> String {
    "seo_keywords.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Catalogue endpoint returning `{ events: { streams: [...] } }`.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Canonical site root, no trailing slash.
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_twitter_site")]
    pub twitter_site: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_metadata_path")]
    pub metadata_path: String,
    #[serde(default = "default_sitemap_path")]
    pub sitemap_path: String,
    #[serde(default = "default_keywords_path")]
    pub keywords_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            domain: default_domain(),
            site_name: default_site_name(),
            twitter_site: default_twitter_site(),
            language: default_language(),
            locale: default_locale(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            metadata_path: default_metadata_path(),
            sitemap_path: default_sitemap_path(),
            keywords_path: default_keywords_path(),
        }
    }
}

impl SiteConfig {
    /// Load config using env var + fallback:
    /// 1) $SITE_CONFIG_PATH
    /// 2) config/site.toml
    /// 3) compiled-in defaults
    pub fn load() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("SITE_CONFIG_PATH points to non-existent path"));
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            return Self::load_from(&fallback);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading site config from {}", path.display()))?;
        let mut cfg: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("parsing site config from {}", path.display()))?;
        // Normalize the domain so URL interpolation stays slash-safe.
        while cfg.domain.ends_with('/') {
            cfg.domain.pop();
        }
        Ok(cfg)
    }
}
