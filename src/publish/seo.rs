use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Site-wide settings for canonical URLs and page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin, e.g. `https://docs.example.com`. No trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub default_description: String,
    /// Site-relative path of the fallback social image.
    pub default_image_path: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>, site_name: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            site_name: site_name.into(),
            default_description: "A library of organized, searchable documents.".into(),
            default_image_path: "assets/og-image.png".into(),
        }
    }

    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub fn default_title(&self) -> String {
        format!("{} - Static Document Library", self.site_name)
    }

    pub fn document_url(&self, slug: &str) -> String {
        self.absolute(&format!("doc/{slug}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKey {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub id: String,
    pub content: String,
}

impl MetaTag {
    fn name(id: &str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name,
            id: id.to_string(),
            content: content.into(),
        }
    }

    fn property(id: &str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property,
            id: id.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

/// schema.org `Article` block for a document page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStructuredData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub headline: String,
    pub author: PersonRef,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    pub description: String,
}

impl ArticleStructuredData {
    pub fn for_document(doc: &Document) -> Self {
        Self {
            context: "https://schema.org".into(),
            kind: "Article".into(),
            headline: doc.metadata.title.clone(),
            author: PersonRef {
                kind: "Person".into(),
                name: doc.metadata.author.clone(),
            },
            date_published: doc.metadata.date.clone(),
            description: doc.metadata.description.clone(),
        }
    }

    /// `<script type="application/ld+json">` element, safe to inline.
    pub fn to_script_tag(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?.replace("</", "<\\/");
        Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
    }
}

/// Everything a page renderer writes into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image_url: String,
    pub og_type: String,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub tags: Vec<String>,
    pub structured_data: Option<ArticleStructuredData>,
}

impl SeoMetadata {
    /// Defaults for pages that are not about a single document.
    pub fn site_default(site: &SiteConfig) -> Self {
        Self {
            title: site.default_title(),
            description: site.default_description.clone(),
            canonical_url: site.absolute(""),
            image_url: site.absolute(&site.default_image_path),
            og_type: "website".into(),
            author: None,
            published_date: None,
            tags: Vec::new(),
            structured_data: None,
        }
    }

    /// A listing page such as `/category/{name}`.
    pub fn for_page(site: &SiteConfig, title: &str, path: &str) -> Self {
        Self {
            title: format!("{title} | {}", site.site_name),
            canonical_url: site.absolute(path),
            ..Self::site_default(site)
        }
    }

    pub fn for_document(site: &SiteConfig, doc: &Document) -> Self {
        let meta = &doc.metadata;
        let description = if meta.description.trim().is_empty() {
            site.default_description.clone()
        } else {
            meta.description.clone()
        };
        let image_url = match &doc.thumbnail_url {
            Some(path) => site.absolute(path),
            None => site.absolute(&site.default_image_path),
        };

        let mut tags: Vec<String> = Vec::with_capacity(meta.tags.len());
        for tag in &meta.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }

        Self {
            title: format!("{} | {}", meta.title, site.site_name),
            description,
            canonical_url: site.document_url(doc.slug.as_str()),
            image_url,
            og_type: "article".into(),
            author: non_empty(&meta.author),
            published_date: non_empty(&meta.date),
            tags,
            structured_data: Some(ArticleStructuredData::for_document(doc)),
        }
    }

    /// Flatten into `<meta>` tags, in the order a renderer should write them.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![
            MetaTag::name("description", &self.description),
            MetaTag::property("og:title", &self.title),
            MetaTag::name("twitter:title", &self.title),
            MetaTag::property("og:description", &self.description),
            MetaTag::name("twitter:description", &self.description),
            MetaTag::property("og:image", &self.image_url),
            MetaTag::name("twitter:image", &self.image_url),
            MetaTag::property("og:url", &self.canonical_url),
            MetaTag::property("og:type", &self.og_type),
        ];

        if !self.tags.is_empty() {
            tags.push(MetaTag::name("keywords", self.tags.join(", ")));
        }
        if let Some(author) = &self.author {
            tags.push(MetaTag::name("author", author));
        }
        if let Some(date) = &self.published_date {
            tags.push(MetaTag::property("article:published_time", date));
        }
        for tag in &self.tags {
            tags.push(MetaTag::property("article:tag", tag));
        }

        tags
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
