//! Offline publishing helpers that work against the on-disk layout:
//!
//! ```text
//! documents/manifest.json
//! documents/{slug}/metadata.json
//! documents/{slug}/document.html
//! documents/{slug}/document.pdf
//! documents/{slug}/thumbnail.png   (optional)
//! ```
//!
//! plus the SEO metadata a page renderer writes for a resolved document.

pub mod manifest;
pub mod seo;
pub mod sitemap;

use std::path::PathBuf;

use thiserror::Error;

use crate::types::identifiers::SlugError;

pub use manifest::{read_manifest, scan_documents_dir, write_manifest, MANIFEST_FILE};
pub use seo::{ArticleStructuredData, MetaKey, MetaTag, PersonRef, SeoMetadata, SiteConfig};
pub use sitemap::{
    entries_from_documents, read_metadata_index, render_sitemap, sitemap_urls, write_sitemap, ChangeFreq,
    SitemapUrl,
};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Document folder is not a valid slug: {0}")]
    InvalidSlug(#[from] SlugError),
    #[error("Documents directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl PublishError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PublishError::Io { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| PublishError::Json { path, source }
    }
}
