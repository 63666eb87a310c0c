use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{AssetSource, SourceError};

/// In-memory asset source.
///
/// Useful for testing the catalog without a server or a directory tree.
/// Paths can be marked as failing (HTTP 500) or stalling (never resolve).
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: BTreeMap<String, Vec<u8>>,
    failing: BTreeSet<String>,
    stalling: BTreeSet<String>,
    requests: Arc<AtomicUsize>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(path.into(), body.into());
        self
    }

    pub fn with_failure(mut self, path: impl Into<String>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn with_stall(mut self, path: impl Into<String>) -> Self {
        self.stalling.insert(path.into());
        self
    }

    /// Number of `fetch` and `exists` calls served so far, across clones.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    async fn gate(&self, path: &str) -> Result<(), SourceError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if self.stalling.contains(path) {
            futures::future::pending::<()>().await;
        }
        if self.failing.contains(path) {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AssetSource for MemoryAssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        self.gate(path).await?;
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                path: path.to_string(),
            })
    }

    async fn exists(&self, path: &str) -> Result<bool, SourceError> {
        self.gate(path).await?;
        Ok(self.assets.contains_key(path))
    }

    fn describe(&self) -> String {
        format!("memory ({} assets)", self.assets.len())
    }
}
