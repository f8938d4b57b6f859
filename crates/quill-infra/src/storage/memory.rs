//! In-memory collection store - used by handler tests and as a fallback
//! when running without a data file. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Collection;
use quill_core::ports::{CollectionStore, StorageError};

pub struct InMemoryStore {
    collection: RwLock<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(Collection::default()),
        }
    }

    /// Store pre-populated with a collection.
    pub fn seeded(collection: Collection) -> Self {
        Self {
            collection: RwLock::new(collection),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionStore for InMemoryStore {
    async fn load(&self) -> Collection {
        self.collection.read().await.clone()
    }

    async fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        *self.collection.write().await = collection.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::NewPost;

    #[tokio::test]
    async fn save_then_load_returns_the_saved_collection() {
        let store = InMemoryStore::new();
        let mut collection = store.load().await;
        collection
            .insert(NewPost {
                title: Some("First".to_string()),
                content: Some("c".to_string()),
                author: Some("A".to_string()),
                date: None,
            })
            .unwrap();
        store.save(&collection).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.posts.len(), 1);
        assert_eq!(loaded.posts[0].id, 1);
    }
}
