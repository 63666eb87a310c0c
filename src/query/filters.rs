use crate::catalog::CatalogState;
use crate::document::{Document, Person};

/// Browse-view criteria. Every criterion that is set must match.
///
/// Text is a case-insensitive substring test over title, description,
/// author, category and tags; the rest are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub text: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub person: Option<Person>,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank or whitespace-only text is treated as no text criterion.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn person(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.person = Some(Person::new(firstname, lastname));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.tag.is_none() && self.person.is_none()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        let meta = &doc.metadata;

        if let Some(category) = &self.category {
            if &meta.category != category {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !meta.has_tag(tag) {
                return false;
            }
        }
        if let Some(person) = &self.person {
            if !meta.has_person(&person.firstname, &person.lastname) {
                return false;
            }
        }
        match &self.text {
            Some(text) => matches_text(doc, &text.trim().to_lowercase()),
            None => true,
        }
    }
}

fn matches_text(doc: &Document, needle: &str) -> bool {
    let meta = &doc.metadata;
    [&meta.title, &meta.description, &meta.author, &meta.category]
        .into_iter()
        .chain(meta.tags.iter())
        .any(|field| field.to_lowercase().contains(needle))
}

impl CatalogState {
    /// Documents matching `filter`, in collection order.
    pub fn filter(&self, filter: &DocumentFilter) -> Vec<&Document> {
        self.documents().iter().filter(|doc| filter.matches(doc)).collect()
    }

    /// Linear, case-insensitive substring search.
    pub fn search(&self, text: &str) -> Vec<&Document> {
        self.filter(&DocumentFilter::new().text(text))
    }
}
