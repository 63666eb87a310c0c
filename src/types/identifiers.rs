use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Directory (relative to the site root) that holds every document folder.
pub const DOCUMENTS_DIR: &str = "documents";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,
    #[error("Slug must not start with '.': {0}")]
    Hidden(String),
    #[error("Slug contains a character that is not URL-safe: {0}")]
    InvalidCharacter(String),
}

impl Slug {
    /// Validate a manifest entry as a slug.
    ///
    /// A slug names a single asset subdirectory, so path separators and
    /// anything needing percent-encoding are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, SlugError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(SlugError::Empty);
        }
        if raw.starts_with('.') {
            return Err(SlugError::Hidden(raw));
        }
        let url_safe = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
        if !url_safe {
            return Err(SlugError::InvalidCharacter(raw));
        }

        Ok(Slug(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `documents/{slug}`
    pub fn base_path(&self) -> String {
        format!("{DOCUMENTS_DIR}/{}", self.0)
    }

    pub fn metadata_path(&self) -> String {
        self.asset_path("metadata.json")
    }

    pub fn html_path(&self) -> String {
        self.asset_path("document.html")
    }

    pub fn pdf_path(&self) -> String {
        self.asset_path("document.pdf")
    }

    pub fn thumbnail_path(&self) -> String {
        self.asset_path("thumbnail.png")
    }

    fn asset_path(&self, file: &str) -> String {
        format!("{}/{file}", self.base_path())
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
