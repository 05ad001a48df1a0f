// src/source.rs
//! Wire model of the upstream catalogue: `{ events: { streams: [category…] } }`,
//! where each category carries its own `streams` array of scheduled events.

use serde::Deserialize;
use serde_json::Value;

use crate::error::PipelineError;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalogue {
    pub events: Events,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Events {
    pub streams: Vec<SourceCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceCategory {
    pub id: u64,
    pub category: String,
    #[serde(default)]
    pub always_live: bool,
    #[serde(default)]
    pub streams: Vec<SourceStream>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceStream {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub poster: String,
    pub uri_name: String,
    pub starts_at: i64,
    pub ends_at: i64,
    #[serde(default)]
    pub category_name: String,
    pub viewers: Option<u64>,
    pub always_live: Option<bool>,
}

impl Catalogue {
    /// Typed view of an already shape-checked document.
    pub fn from_value(doc: Value) -> Result<Self, PipelineError> {
        serde_json::from_value(doc)
            .map_err(|e| PipelineError::Shape(format!("decoding categories: {e}")))
    }
}

/// Presence check for the expected top level. Runs on the raw document so a
/// non-parseable body (fetch failure) and a wrong shape stay distinguishable.
pub fn validate_shape(doc: &Value) -> Result<(), PipelineError> {
    match doc.pointer("/events/streams") {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(PipelineError::Shape(
            "missing `events.streams` array".to_string(),
        )),
    }
}
