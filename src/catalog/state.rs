// A snapshot is never mutated in place:
// the catalog replaces it wholesale on each transition
// and consumers hold cheap clones.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::CatalogError;
use crate::document::Document;

#[derive(Debug, Clone)]
pub struct CatalogState {
    documents: Arc<[Document]>,
    is_loaded: bool,
    error: Option<String>,
}

impl CatalogState {
    /// Initial state: nothing loaded yet.
    pub fn loading() -> Self {
        Self {
            documents: Arc::from(Vec::<Document>::new()),
            is_loaded: false,
            error: None,
        }
    }

    /// A successfully loaded catalog, in manifest order.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(&doc.slug) {
                return Err(CatalogError::DuplicateSlug(doc.slug.clone()));
            }
        }

        Ok(Self {
            documents: documents.into(),
            is_loaded: true,
            error: None,
        })
    }

    /// A settled-but-failed catalog: loaded, empty, with a message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            documents: Arc::from(Vec::<Document>::new()),
            is_loaded: true,
            error: Some(error.into()),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::loading()
    }
}
