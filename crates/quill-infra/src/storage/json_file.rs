//! JSON file implementation of `CollectionStore`.
//!
//! The whole collection lives in a single `{"posts": [...]}` document.
//! Reads degrade to an empty collection on missing or malformed state; the
//! malformed case is logged as a warning so tests and operators can see it.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use quill_core::domain::Collection;
use quill_core::ports::{CollectionStore, StorageError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self) -> Collection {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Collection::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read collection, starting empty"
                );
                return Collection::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored collection is malformed, starting empty"
                );
                Collection::default()
            }
        }
    }

    async fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::Write(e.to_string()))?;
            }
        }

        let json = serde_json::to_vec_pretty(collection)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}
