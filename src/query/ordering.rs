use std::cmp::Ordering;

use crate::catalog::CatalogState;
use crate::document::Document;

/// Newest first. Undated (or unparseable) documents go last; ties keep
/// collection order.
pub fn by_date_desc(a: &Document, b: &Document) -> Ordering {
    match (a.metadata.published_on(), b.metadata.published_on()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl CatalogState {
    /// Archive ordering of the whole collection.
    pub fn documents_by_date_desc(&self) -> Vec<&Document> {
        let mut docs: Vec<&Document> = self.documents().iter().collect();
        // Stable sort keeps manifest order among equal dates.
        docs.sort_by(|a, b| by_date_desc(a, b));

        debug_assert!(docs
            .windows(2)
            .all(|w| by_date_desc(w[0], w[1]) != Ordering::Greater));

        docs
    }

    pub fn recent_documents(&self, limit: usize) -> Vec<&Document> {
        let mut docs = self.documents_by_date_desc();
        docs.truncate(limit);
        docs
    }
}
