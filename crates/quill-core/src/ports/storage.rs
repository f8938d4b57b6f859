use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Collection;

/// Storage-level errors. Only the write side can fail; reads degrade to an
/// empty collection inside the adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize collection: {0}")]
    Serialize(String),

    #[error("failed to write collection: {0}")]
    Write(String),
}

/// Persistence contract for the post collection.
///
/// The collection is always read and written as one unit: every operation
/// loads fresh, computes, and saves the whole document back.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Loads the full collection. Missing or malformed durable state yields
    /// an empty collection (logged as a warning), never an error.
    async fn load(&self) -> Collection;

    /// Persists the full collection, creating missing parent directories.
    async fn save(&self, collection: &Collection) -> Result<(), StorageError>;
}
