// src/error.rs

use thiserror::Error;

/// The two unrecoverable failures of a generation run. Everything past shape
/// validation is total: malformed per-record data degrades instead of erroring.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("source fetch failed: {0}")]
    Fetch(anyhow::Error),

    #[error("source document shape invalid: {0}")]
    Shape(String),
}
