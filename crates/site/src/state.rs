//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::store::RecordStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The record store is built by
/// the caller and handed in, so tests can start each case from a fresh store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: RecordStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig, store: RecordStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }
}
