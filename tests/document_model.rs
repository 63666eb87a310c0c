use doc_catalog::document::{Document, DocumentError, DocumentMetadata, Person, Slug};
use doc_catalog::types::SlugError;

fn slug(s: &str) -> Slug {
    Slug::new(s).unwrap()
}

fn metadata(category: &str, tags: &[&str]) -> DocumentMetadata {
    DocumentMetadata {
        title: "Title".into(),
        description: "Description".into(),
        author: "Author".into(),
        date: "2024-05-01".into(),
        category: category.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        people: Vec::new(),
    }
}

#[test]
fn invariant_slug_rejects_unsafe_names() {
    assert_eq!(Slug::new(""), Err(SlugError::Empty));
    assert!(matches!(Slug::new(".git"), Err(SlugError::Hidden(_))));
    assert!(matches!(Slug::new("a/b"), Err(SlugError::InvalidCharacter(_))));
    assert!(matches!(Slug::new("has space"), Err(SlugError::InvalidCharacter(_))));
    assert!(Slug::new("annual-report_2024").is_ok());
}

#[test]
fn invariant_asset_paths_derive_from_slug() {
    let s = slug("doc-a");
    assert_eq!(s.metadata_path(), "documents/doc-a/metadata.json");
    assert_eq!(s.html_path(), "documents/doc-a/document.html");
    assert_eq!(s.pdf_path(), "documents/doc-a/document.pdf");
    assert_eq!(s.thumbnail_path(), "documents/doc-a/thumbnail.png");
}

#[test]
fn invariant_pdf_url_derived_and_thumbnail_only_when_confirmed() {
    let with = Document::ingest(slug("abc"), metadata("X", &[]), b"<p>x</p>".to_vec(), true).unwrap();
    let without = Document::ingest(slug("abc"), metadata("X", &[]), b"<p>x</p>".to_vec(), false).unwrap();

    assert_eq!(with.pdf_url, "documents/abc/document.pdf");
    assert_eq!(with.thumbnail_url.as_deref(), Some("documents/abc/thumbnail.png"));
    assert_eq!(without.thumbnail_url, None);
}

#[test]
fn invariant_ingest_strips_document_wrappers() {
    let raw = "<!DOCTYPE html><html><head><style>p{}</style></head>\
               <body><img src=\"abc_files/1.png\"></body></html>";
    let doc = Document::ingest(slug("abc"), metadata("X", &[]), raw.as_bytes().to_vec(), false).unwrap();

    assert!(!doc.html_content.contains("<head"));
    assert!(!doc.html_content.contains("<body"));
    assert_eq!(
        doc.html_content,
        "<style>p{}</style><img src=\"documents/abc/abc_files/1.png\">"
    );
}

#[test]
fn invariant_ingest_strips_wrappers_with_omitted_end_tags() {
    let raw = "<html><head><style>p{}</style><body><img src='abc_files/1.png'>\
               <img src='https://cdn.example.com/abc_files/2.png'></html>";
    let doc = Document::ingest(slug("abc"), metadata("X", &[]), raw.as_bytes().to_vec(), false).unwrap();

    assert!(!doc.html_content.contains("<head"));
    assert!(!doc.html_content.contains("<body"));
    assert_eq!(
        doc.html_content,
        "<style>p{}</style><img src='documents/abc/abc_files/1.png'>\
         <img src='https://cdn.example.com/abc_files/2.png'>"
    );
}

#[test]
fn invariant_utf8_rejection() {
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = Document::ingest(slug("bad"), metadata("X", &[]), invalid_bytes, false);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8 { .. })));
}

#[test]
fn metadata_without_people_defaults_to_empty() {
    let json = br#"{"title":"T","description":"D","author":"A","date":"2024-01-02","category":"C","tags":["x","x","y"]}"#;
    let meta = Document::parse_metadata(&slug("a"), json).unwrap();

    assert!(meta.people.is_empty());
    assert_eq!(meta.tags, vec!["x", "x", "y"]);
    assert_eq!(meta.published_on(), chrono::NaiveDate::from_ymd_opt(2024, 1, 2));
}

#[test]
fn metadata_with_people() {
    let json = br#"{"title":"T","description":"D","author":"A","date":"2024-01-02T10:00:00Z","category":"C","tags":[],
                    "people":[{"firstname":"Ada","lastname":"Lovelace"}]}"#;
    let meta = Document::parse_metadata(&slug("a"), json).unwrap();

    assert_eq!(meta.people, vec![Person::new("Ada", "Lovelace")]);
    assert!(meta.has_person("Ada", "Lovelace"));
    assert!(!meta.has_person("Ada", "Byron"));
    assert_eq!(meta.published_on(), chrono::NaiveDate::from_ymd_opt(2024, 1, 2));
}

#[test]
fn malformed_metadata_is_reported_with_slug() {
    let err = Document::parse_metadata(&slug("broken"), b"{ not json").unwrap_err();
    match err {
        DocumentError::MalformedMetadata { slug, .. } => assert_eq!(slug, "broken"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn golden_document_serialization() {
    let doc = Document::ingest(slug("abc"), metadata("X", &["t1"]), b"<p>x</p>".to_vec(), false).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["slug"], "abc");
    assert_eq!(value["pdf_url"], "documents/abc/document.pdf");
    assert_eq!(value["metadata"]["tags"][0], "t1");
    assert!(value.get("thumbnail_url").is_none());
    assert!(value["metadata"].get("people").is_none());
}
