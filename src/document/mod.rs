pub mod metadata;
pub mod document;
pub mod normalize;

pub use crate::types::identifiers::Slug;
pub use metadata::{DocumentMetadata, Person};
pub use document::{Document, DocumentError};
pub use normalize::{extract_fragment, normalize_document_html, rewrite_asset_paths};
