//! Where document assets come from.
//!
//! The catalog only ever reads relative paths such as
//! `documents/manifest.json` or `documents/{slug}/metadata.json`; an
//! [`AssetSource`] resolves them against a static HTTP server, a directory
//! on disk, or an in-memory map.

pub mod fs;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use fs::FsAssetSource;
pub use http::HttpAssetSource;
pub use memory::MemoryAssetSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Asset not found: {path}")]
    NotFound { path: String },
    #[error("Asset {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("Request for {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Reading {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Read-only access to the served site layout.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the full body of the asset at `path`.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError>;

    /// Check whether an asset exists without downloading it.
    async fn exists(&self, path: &str) -> Result<bool, SourceError>;

    /// Human-readable location, used in log output.
    fn describe(&self) -> String;
}
