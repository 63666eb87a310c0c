use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::CatalogConfig;
use crate::document::{Document, DocumentError};
use crate::source::{AssetSource, SourceError};
use crate::types::identifiers::{Slug, SlugError, DOCUMENTS_DIR};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not fetch manifest.json: {source}")]
    ManifestUnavailable {
        #[source]
        source: SourceError,
    },
    #[error("manifest.json is not a JSON array of slugs: {0}")]
    MalformedManifest(#[source] serde_json::Error),
    #[error("Invalid slug in manifest: {0}")]
    InvalidSlug(#[from] SlugError),
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(Slug),
    #[error("Could not fetch data for slug {slug}: {source}")]
    DocumentFetchFailed {
        slug: Slug,
        #[source]
        source: SourceError,
    },
    #[error(transparent)]
    MalformedDocument(#[from] DocumentError),
    #[error("{failed} of {total} documents failed to load; first failure: {first}")]
    Incomplete {
        failed: usize,
        total: usize,
        first: Box<CatalogError>,
    },
    #[error("Catalog did not finish loading within {} ms", .0.as_millis())]
    TimedOut(Duration),
}

pub fn manifest_path() -> String {
    format!("{DOCUMENTS_DIR}/manifest.json")
}

/// Fetch and validate the manifest.
pub async fn fetch_manifest<S>(source: &S) -> Result<Vec<Slug>, CatalogError>
where
    S: AssetSource + ?Sized,
{
    let bytes = source
        .fetch(&manifest_path())
        .await
        .map_err(|source| CatalogError::ManifestUnavailable { source })?;

    let raw: Vec<String> = serde_json::from_slice(&bytes).map_err(CatalogError::MalformedManifest)?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut slugs = Vec::with_capacity(raw.len());
    for entry in raw {
        let slug = Slug::new(entry)?;
        if !seen.insert(slug.clone()) {
            return Err(CatalogError::DuplicateSlug(slug));
        }
        slugs.push(slug);
    }

    Ok(slugs)
}

/// Load every document named by the manifest.
///
/// The manifest fetch strictly precedes the per-document fetches, which all
/// run concurrently and are all awaited. Any failure fails the whole load;
/// the error carries how many documents failed.
pub async fn load_documents<S>(source: &S, config: &CatalogConfig) -> Result<Vec<Document>, CatalogError>
where
    S: AssetSource + ?Sized,
{
    let slugs = fetch_manifest(source).await?;
    let total = slugs.len();
    info!(documents = total, source = %source.describe(), "Manifest fetched");

    let results = join_all(
        slugs
            .into_iter()
            .map(|slug| load_document(source, slug, config.probe_thumbnails)),
    )
    .await;

    let mut documents = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                warn!(error = %e, "Document failed to load");
                failures.push(e);
            }
        }
    }

    if !failures.is_empty() {
        let failed = failures.len();
        let first = failures.swap_remove(0);
        return Err(CatalogError::Incomplete {
            failed,
            total,
            first: Box::new(first),
        });
    }

    Ok(documents)
}

/// Fetch metadata, HTML and the thumbnail probe for one slug concurrently.
pub async fn load_document<S>(source: &S, slug: Slug, probe_thumbnail: bool) -> Result<Document, CatalogError>
where
    S: AssetSource + ?Sized,
{
    let metadata_path = slug.metadata_path();
    let html_path = slug.html_path();
    let (metadata, html, has_thumbnail) = tokio::join!(
        source.fetch(&metadata_path),
        source.fetch(&html_path),
        thumbnail_exists(source, &slug, probe_thumbnail),
    );

    let metadata = metadata.map_err(|source| CatalogError::DocumentFetchFailed {
        slug: slug.clone(),
        source,
    })?;
    let html = html.map_err(|source| CatalogError::DocumentFetchFailed {
        slug: slug.clone(),
        source,
    })?;

    let metadata = Document::parse_metadata(&slug, &metadata)?;
    Ok(Document::ingest(slug, metadata, html, has_thumbnail)?)
}

// Best-effort: a failed probe means "no thumbnail", never a load failure.
async fn thumbnail_exists<S>(source: &S, slug: &Slug, probe: bool) -> bool
where
    S: AssetSource + ?Sized,
{
    if !probe {
        return false;
    }
    match source.exists(&slug.thumbnail_path()).await {
        Ok(found) => {
            debug!(%slug, found, "Thumbnail probed");
            found
        }
        Err(e) => {
            debug!(%slug, error = %e, "Thumbnail probe failed");
            false
        }
    }
}
