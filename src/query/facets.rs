use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogState;
use crate::document::{Document, Person};

/// How a facet list is presented. Ordering is a presentation choice; the
/// catalog itself always reports first-occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetOrder {
    #[default]
    FirstOccurrence,
    Alphabetical,
}

impl FacetOrder {
    pub fn apply(self, mut values: Vec<String>) -> Vec<String> {
        if self == FacetOrder::Alphabetical {
            values.sort();
        }
        values
    }
}

/// A category and the documents filed under it.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub documents: Vec<&'a Document>,
}

// Distinct values, first occurrence wins.
fn distinct<'a, T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

impl CatalogState {
    pub fn all_categories(&self) -> Vec<String> {
        distinct(self.documents().iter().map(|doc| &doc.metadata.category))
    }

    pub fn all_tags(&self) -> Vec<String> {
        distinct(self.documents().iter().flat_map(|doc| doc.metadata.tags.iter()))
    }

    pub fn all_people(&self) -> Vec<Person> {
        distinct(self.documents().iter().flat_map(|doc| doc.metadata.people.iter()))
    }

    /// People ordered by lastname, then firstname.
    pub fn sorted_people(&self) -> Vec<Person> {
        let mut people = self.all_people();
        people.sort_by(|a, b| {
            a.lastname
                .cmp(&b.lastname)
                .then_with(|| a.firstname.cmp(&b.firstname))
        });
        people
    }

    /// Every category with its documents, categories sorted by name.
    pub fn category_groups(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for doc in self.documents() {
            let category = doc.metadata.category.as_str();
            match groups.iter_mut().find(|g| g.name == category) {
                Some(group) => group.documents.push(doc),
                None => groups.push(CategoryGroup {
                    name: category,
                    documents: vec![doc],
                }),
            }
        }
        groups.sort_by(|a, b| a.name.cmp(b.name));
        groups
    }
}
