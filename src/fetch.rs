// src/fetch.rs
//! Catalogue fetch seam. The pipeline only sees `CatalogueSource`, so tests
//! swap the HTTP client for a fixture without touching the transform.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Raw parsed document; shape validation happens in the pipeline.
    async fn fetch(&self) -> Result<Value>;
    fn name(&self) -> &'static str;
}

pub fn parse_catalogue_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).context("parsing catalogue json")
}

pub struct HttpCatalogueSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogueSource {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("building catalogue http client")?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogueSource {
    async fn fetch(&self) -> Result<Value> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("catalogue http get()")?
            .error_for_status()
            .context("catalogue http status")?;
        let body = resp.text().await.context("catalogue http .text()")?;
        parse_catalogue_body(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

// --- Test helper ---
/// Serves a canned body through the same parse path as the HTTP source.
pub struct FixtureSource {
    body: String,
}

impl FixtureSource {
    pub fn from_str(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

#[async_trait]
impl CatalogueSource for FixtureSource {
    async fn fetch(&self) -> Result<Value> {
        parse_catalogue_body(&self.body)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
