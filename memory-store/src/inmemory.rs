//! In-memory implementation of the [`MemoryStore`] trait.
//!
//! Entries live for the lifetime of the process and are lost on restart.
//! Thread safety comes from `Arc<RwLock<>>`, so one store can be shared across
//! tasks.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::store::MemoryStore;

/// Process-lifetime key/value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of saved keys.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Returns true if nothing has been saved.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes all saved entries.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }
}

#[async_trait::async_trait]
impl MemoryStore for InMemoryStore {
    async fn save(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        let mut entries = self.entries.write().await;
        let replaced = entries.insert(key.to_string(), value.to_string()).is_some();
        drop(entries);

        info!(key = %key, replaced, "step: memory entry saved");
        Ok(())
    }

    async fn read(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let entries = self.entries.read().await;
        let value = entries.get(key).cloned();
        info!(key = %key, found = value.is_some(), "step: memory entry read");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_read() {
        let store = InMemoryStore::new();
        store.save("pet", "Fluffy").await.unwrap();

        let value = store.read("pet").await.unwrap();
        assert_eq!(value, Some("Fluffy".to_string()));
    }

    #[tokio::test]
    async fn test_read_missing_key_is_none() {
        let store = InMemoryStore::new();
        let value = store.read("nonexistent").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_last_write_wins() {
        let store = InMemoryStore::new();
        store.save("pet", "Fluffy").await.unwrap();
        store.save("pet", "Rex").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.read("pet").await.unwrap(), Some("Rex".to_string()));
    }

    #[tokio::test]
    async fn test_save_same_value_twice_keeps_single_entry() {
        let store = InMemoryStore::new();
        store.save("pet", "Fluffy").await.unwrap();
        store.save("pet", "Fluffy").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.read("pet").await.unwrap(), Some("Fluffy".to_string()));
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let store = InMemoryStore::new();
        store.save("Pet", "Fluffy").await.unwrap();

        assert!(store.read("pet").await.unwrap().is_none());
        assert_eq!(store.read("Pet").await.unwrap(), Some("Fluffy".to_string()));
    }

    #[tokio::test]
    async fn test_len_and_is_empty() {
        let store = InMemoryStore::new();

        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);

        store.save("a", "1").await.unwrap();
        store.save("b", "2").await.unwrap();

        assert!(!store.is_empty().await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryStore::new();
        store.save("a", "1").await.unwrap();
        assert_eq!(store.len().await, 1);

        store.clear().await;

        assert_eq!(store.len().await, 0);
        assert!(store.read("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.save("pet", "Fluffy").await.unwrap();

        assert_eq!(other.read("pet").await.unwrap(), Some("Fluffy".to_string()));
    }
}
