use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person credited on a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub firstname: String,
    pub lastname: String,
}

impl Person {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Person {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    pub fn matches(&self, firstname: &str, lastname: &str) -> bool {
        self.firstname == firstname && self.lastname == lastname
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Contents of `documents/{slug}/metadata.json`.
///
/// `people` is absent from older metadata files and defaults to empty.
/// `tags` may repeat in the source; faceting treats them as a set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<Person>,
}

impl DocumentMetadata {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn shares_tag_with(&self, other: &DocumentMetadata) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }

    pub fn has_person(&self, firstname: &str, lastname: &str) -> bool {
        self.people.iter().any(|p| p.matches(firstname, lastname))
    }

    /// Calendar date of publication, if `date` is an ISO date or datetime.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(date)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }
}
