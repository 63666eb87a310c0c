use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::PublishError;
use crate::types::identifiers::Slug;

pub const MANIFEST_FILE: &str = "manifest.json";
const METADATA_FILE: &str = "metadata.json";

/// Find every document folder under `documents_dir`.
///
/// A document folder is a non-hidden subdirectory holding `metadata.json`.
/// Result is sorted by name.
pub fn scan_documents_dir(documents_dir: &Path) -> Result<Vec<Slug>, PublishError> {
    if !documents_dir.is_dir() {
        return Err(PublishError::MissingDirectory(documents_dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(documents_dir).map_err(PublishError::io(documents_dir))? {
        let entry = entry.map_err(PublishError::io(documents_dir))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "Skipping folder with non UTF-8 name");
            continue;
        };
        if name.starts_with('.') || !path.join(METADATA_FILE).is_file() {
            continue;
        }
        names.push(name);
    }

    names.sort();
    names
        .into_iter()
        .map(|n| Slug::new(n).map_err(PublishError::from))
        .collect()
}

/// Scan `documents_dir` and write `manifest.json` into it.
///
/// The file is a pretty-printed JSON array with a trailing newline, replaced
/// atomically.
pub fn write_manifest(documents_dir: &Path) -> Result<Vec<Slug>, PublishError> {
    let slugs = scan_documents_dir(documents_dir)?;
    if slugs.is_empty() {
        warn!(dir = %documents_dir.display(), "No document folders found; each needs a metadata.json");
    }

    let manifest_path = documents_dir.join(MANIFEST_FILE);
    let mut body = serde_json::to_string_pretty(&slugs).map_err(PublishError::json(&manifest_path))?;
    body.push('\n');

    let temp_path = documents_dir.join(format!("{MANIFEST_FILE}.tmp"));
    fs::write(&temp_path, body).map_err(PublishError::io(&temp_path))?;
    fs::rename(&temp_path, &manifest_path).map_err(PublishError::io(&manifest_path))?;

    info!(path = %manifest_path.display(), documents = slugs.len(), "Manifest generated");
    Ok(slugs)
}

/// Read `manifest.json` from `documents_dir`.
pub fn read_manifest(documents_dir: &Path) -> Result<Vec<Slug>, PublishError> {
    let path = documents_dir.join(MANIFEST_FILE);
    let bytes = fs::read(&path).map_err(PublishError::io(&path))?;
    serde_json::from_slice(&bytes).map_err(PublishError::json(&path))
}
