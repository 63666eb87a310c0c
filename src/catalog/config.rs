use std::time::Duration;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogConfig {
    /// Upper bound on a whole initialization, manifest included.
    pub load_timeout_ms: u64,
    /// Probe `thumbnail.png` for every document while loading.
    pub probe_thumbnails: bool,
}

impl CatalogConfig {
    pub fn v0() -> Self {
        Self {
            load_timeout_ms: 30_000,
            probe_thumbnails: true,
        }
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_thumbnail_probe(mut self, probe: bool) -> Self {
        self.probe_thumbnails = probe;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::v0()
    }
}
