// src/write.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[async_trait::async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Store (path, content) pairs. The pipeline hands over the complete
    /// artifact set in one call, so a failed run writes nothing.
    async fn store(&self, items: Vec<(String, String)>) -> Result<()>;
}

/// Writes artifacts under a root directory, creating parents as needed.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ArtifactSink for FsSink {
    async fn store(&self, items: Vec<(String, String)>) -> Result<()> {
        for (path, content) in items {
            let target = self.root.join(&path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&target, content)
                .with_context(|| format!("writing {}", target.display()))?;
            tracing::debug!(path = %target.display(), "artifact written");
        }
        Ok(())
    }
}

// --- Test helper ---
pub struct MemorySink {
    pub calls: std::sync::Mutex<Vec<Vec<(String, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ArtifactSink for MemorySink {
    async fn store(&self, items: Vec<(String, String)>) -> Result<()> {
        self.calls.lock().unwrap().push(items);
        Ok(())
    }
}
