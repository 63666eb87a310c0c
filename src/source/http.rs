use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use super::{AssetSource, SourceError};

/// Assets served by a static HTTP server rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAssetSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, SourceError> {
        // Url::join replaces the last segment unless the base ends with '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| SourceError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| SourceError::InvalidBaseUrl(format!("{}{path}", self.base_url)))
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.url_for(path)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                path: path.to_string(),
                source,
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|source| SourceError::Http {
            path: path.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }

    async fn exists(&self, path: &str) -> Result<bool, SourceError> {
        let url = self.url_for(path)?;
        let resp = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                path: path.to_string(),
                source,
            })?;

        match resp.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            s => Err(SourceError::Status {
                path: path.to_string(),
                status: s.as_u16(),
            }),
        }
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths_under_base() {
        let source = HttpAssetSource::new("https://docs.example.com/library").unwrap();
        let url = source.url_for("documents/manifest.json").unwrap();
        assert_eq!(url.as_str(), "https://docs.example.com/library/documents/manifest.json");
    }

    #[test]
    fn leading_slash_stays_under_base() {
        let source = HttpAssetSource::new("https://docs.example.com/library/").unwrap();
        let url = source.url_for("/documents/a/metadata.json").unwrap();
        assert_eq!(url.as_str(), "https://docs.example.com/library/documents/a/metadata.json");
    }

    #[test]
    fn rejects_relative_base() {
        assert!(matches!(
            HttpAssetSource::new("not a url"),
            Err(SourceError::InvalidBaseUrl(_))
        ));
    }
}
