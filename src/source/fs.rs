use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{AssetSource, SourceError};

/// Assets read from a site root on disk (the directory that contains
/// `documents/`).
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        tokio::fs::read(self.resolve(path))
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => SourceError::NotFound {
                    path: path.to_string(),
                },
                _ => SourceError::Io {
                    path: path.to_string(),
                    source,
                },
            })
    }

    async fn exists(&self, path: &str) -> Result<bool, SourceError> {
        tokio::fs::try_exists(self.resolve(path))
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
