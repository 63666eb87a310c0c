//! Read-only catalog over a static document library.
//!
//! `doc-catalog` loads a manifest of document slugs from a static asset
//! source, fetches each document's metadata and exported HTML concurrently,
//! normalizes the HTML into an embeddable fragment, and exposes pure queries
//! (by slug, category, tag, person, related documents, facets) over the
//! resulting immutable snapshot. The `publish` module covers the offline
//! side: manifest and sitemap generation, and page SEO metadata.

pub mod catalog;
pub mod document;
pub mod publish;
pub mod query;
pub mod source;
pub mod types;
