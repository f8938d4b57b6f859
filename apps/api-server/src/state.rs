//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use quill_core::ports::CollectionStore;
use quill_infra::JsonFileStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CollectionStore>,
    /// Serializes the load-mutate-save cycle of mutating handlers so
    /// concurrent writers cannot silently clobber each other's updates.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Build the application state backed by the configured JSON file.
    pub fn new(config: &AppConfig) -> Self {
        tracing::info!(path = %config.data_file.display(), "using JSON file store");
        Self::with_store(Arc::new(JsonFileStore::new(config.data_file.clone())))
    }

    /// State over an arbitrary store (in-memory in tests).
    pub fn with_store(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
