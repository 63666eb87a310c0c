use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::metadata::DocumentMetadata;
use super::normalize::normalize_document_html;
use crate::types::identifiers::Slug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("HTML for {slug} must be valid UTF-8")]
    InvalidUtf8 {
        slug: Slug,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("metadata.json for {slug} is malformed: {source}")]
    MalformedMetadata {
        slug: Slug,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub slug: Slug,
    pub metadata: DocumentMetadata,
    /// Normalized fragment: head styles followed by body content.
    pub html_content: String,
    pub pdf_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Document {
    /// Ingest fetched assets into a Document.
    ///
    /// This is the ONLY way to construct a Document.
    /// HTML is normalized exactly once, here; the PDF URL is derived from
    /// the slug; the thumbnail URL is set only when the probe confirmed it.
    pub fn ingest(
        slug: Slug,
        metadata: DocumentMetadata,
        raw_html: Vec<u8>,
        has_thumbnail: bool,
    ) -> Result<Self, DocumentError> {
        let raw_html = String::from_utf8(raw_html).map_err(|source| DocumentError::InvalidUtf8 {
            slug: slug.clone(),
            source,
        })?;

        let html_content = normalize_document_html(&raw_html, &slug);
        let pdf_url = slug.pdf_path();
        let thumbnail_url = has_thumbnail.then(|| slug.thumbnail_path());

        Ok(Document {
            slug,
            metadata,
            html_content,
            pdf_url,
            thumbnail_url,
        })
    }

    /// Parse a `metadata.json` body for the given slug.
    pub fn parse_metadata(slug: &Slug, bytes: &[u8]) -> Result<DocumentMetadata, DocumentError> {
        serde_json::from_slice(bytes).map_err(|source| DocumentError::MalformedMetadata {
            slug: slug.clone(),
            source,
        })
    }
}
