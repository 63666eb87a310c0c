use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::catalog::loader::{load_documents, CatalogError};
use crate::catalog::{CatalogConfig, CatalogState};
use crate::source::AssetSource;

/// Owner of the document collection.
///
/// Constructed once by the application's composition root and shared by
/// reference. State moves from loading to loaded (or failed) exactly once;
/// subscribers are notified through a watch channel.
pub struct Catalog<S> {
    source: S,
    config: CatalogConfig,
    state: watch::Sender<CatalogState>,
    init: Mutex<()>,
}

impl<S> Catalog<S>
where
    S: AssetSource,
{
    pub fn new(source: S, config: CatalogConfig) -> Self {
        let (state, _) = watch::channel(CatalogState::loading());
        Self {
            source,
            config,
            state,
            init: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Current state, cheap to clone and safe to hold.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Receive every state transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Load the catalog from its source.
    ///
    /// Idempotent: once loaded (or non-empty) this returns the current
    /// snapshot without touching the source. Concurrent callers wait for the
    /// first one to finish. Never fails; a failed load settles as a loaded,
    /// empty catalog carrying an error message.
    pub async fn initialize(&self) -> CatalogState {
        let _guard = self.init.lock().await;

        {
            let current = self.state.borrow();
            if current.is_loaded() || !current.is_empty() {
                return current.clone();
            }
        }

        let timeout = self.config.load_timeout();
        info!(source = %self.source.describe(), ?timeout, "Loading catalog");

        let outcome = match tokio::time::timeout(timeout, load_documents(&self.source, &self.config)).await {
            Ok(result) => result,
            Err(_) => Err(CatalogError::TimedOut(timeout)),
        };

        let next = match outcome.and_then(CatalogState::from_documents) {
            Ok(state) => {
                info!(documents = state.len(), "Catalog loaded");
                state
            }
            Err(e) => {
                warn!(error = %e, "Catalog failed to load");
                CatalogState::failed(e.to_string())
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// Wait until some caller's initialization has settled.
    pub async fn wait_loaded(&self) -> CatalogState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(CatalogState::is_loaded).await {
            Ok(state) => state.clone(),
            // The sender lives as long as self, so this is unreachable in practice.
            Err(_) => self.snapshot(),
        };
        settled
    }
}
