use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use super::manifest::read_manifest;
use super::seo::SiteConfig;
use super::PublishError;
use crate::document::{Document, DocumentMetadata};
use crate::types::identifiers::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeFreq::Weekly => f.write_str("weekly"),
            ChangeFreq::Monthly => f.write_str("monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

/// Every URL of the site: home, browse, each document, then each distinct
/// category and tag (first-occurrence order, URL-encoded).
pub fn sitemap_urls(site: &SiteConfig, entries: &[(Slug, DocumentMetadata)]) -> Vec<SitemapUrl> {
    let mut urls = vec![
        SitemapUrl {
            loc: site.absolute(""),
            lastmod: None,
            changefreq: ChangeFreq::Weekly,
            priority: "1.0",
        },
        SitemapUrl {
            loc: site.absolute("browse"),
            lastmod: None,
            changefreq: ChangeFreq::Weekly,
            priority: "0.9",
        },
    ];

    for (slug, metadata) in entries {
        let date = metadata.date.trim();
        urls.push(SitemapUrl {
            loc: site.document_url(slug.as_str()),
            lastmod: (!date.is_empty()).then(|| date.to_string()),
            changefreq: ChangeFreq::Monthly,
            priority: "0.8",
        });
    }

    let mut categories: Vec<&str> = Vec::new();
    let mut tags: Vec<&str> = Vec::new();
    for (_, metadata) in entries {
        if !categories.contains(&metadata.category.as_str()) {
            categories.push(&metadata.category);
        }
        for tag in &metadata.tags {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
    }

    urls.extend(categories.into_iter().map(|category| SitemapUrl {
        loc: site.absolute(&format!("category/{}", urlencoding::encode(category))),
        lastmod: None,
        changefreq: ChangeFreq::Weekly,
        priority: "0.7",
    }));
    urls.extend(tags.into_iter().map(|tag| SitemapUrl {
        loc: site.absolute(&format!("tag/{}", urlencoding::encode(tag))),
        lastmod: None,
        changefreq: ChangeFreq::Weekly,
        priority: "0.6",
    }));

    urls
}

/// Pair each loaded document with its metadata, for [`sitemap_urls`].
pub fn entries_from_documents(documents: &[Document]) -> Vec<(Slug, DocumentMetadata)> {
    documents
        .iter()
        .map(|doc| (doc.slug.clone(), doc.metadata.clone()))
        .collect()
}

pub fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        if let Some(lastmod) = &url.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
        }
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", url.changefreq));
        xml.push_str(&format!("    <priority>{}</priority>\n", url.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Read the manifest and every `metadata.json` it names.
pub fn read_metadata_index(documents_dir: &Path) -> Result<Vec<(Slug, DocumentMetadata)>, PublishError> {
    read_manifest(documents_dir)?
        .into_iter()
        .map(|slug| -> Result<(Slug, DocumentMetadata), PublishError> {
            let path = documents_dir.join(slug.as_str()).join("metadata.json");
            let bytes = fs::read(&path).map_err(PublishError::io(&path))?;
            let metadata = serde_json::from_slice(&bytes).map_err(PublishError::json(&path))?;
            Ok((slug, metadata))
        })
        .collect()
}

/// Generate `sitemap.xml` for the library in `documents_dir`.
pub fn write_sitemap(documents_dir: &Path, site: &SiteConfig, out: &Path) -> Result<usize, PublishError> {
    let entries = read_metadata_index(documents_dir)?;
    let urls = sitemap_urls(site, &entries);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(PublishError::io(parent))?;
    }
    fs::write(out, render_sitemap(&urls)).map_err(PublishError::io(out))?;

    info!(path = %out.display(), urls = urls.len(), "Sitemap generated");
    Ok(urls.len())
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
