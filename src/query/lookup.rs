use crate::catalog::CatalogState;
use crate::document::Document;

/// Most documents [`CatalogState::related_documents`] returns.
pub const MAX_RELATED: usize = 3;

impl CatalogState {
    pub fn document_by_slug(&self, slug: &str) -> Option<&Document> {
        self.documents().iter().find(|doc| doc.slug == slug)
    }

    pub fn documents_by_category(&self, category: &str) -> Vec<&Document> {
        self.documents()
            .iter()
            .filter(|doc| doc.metadata.category == category)
            .collect()
    }

    pub fn documents_by_tag(&self, tag: &str) -> Vec<&Document> {
        self.documents()
            .iter()
            .filter(|doc| doc.metadata.has_tag(tag))
            .collect()
    }

    /// Documents crediting a person; both names must match exactly.
    pub fn documents_by_person(&self, firstname: &str, lastname: &str) -> Vec<&Document> {
        self.documents()
            .iter()
            .filter(|doc| doc.metadata.has_person(firstname, lastname))
            .collect()
    }

    /// Up to three other documents sharing the category or any tag with
    /// `doc`, in collection order.
    pub fn related_documents(&self, doc: &Document) -> Vec<&Document> {
        self.documents()
            .iter()
            .filter(|other| other.slug != doc.slug)
            .filter(|other| {
                other.metadata.category == doc.metadata.category
                    || other.metadata.shares_tag_with(&doc.metadata)
            })
            .take(MAX_RELATED)
            .collect()
    }
}
