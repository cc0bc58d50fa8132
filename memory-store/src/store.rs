//! Storage interface for remembered key/value pairs.

use async_trait::async_trait;

/// Trait for saving and reading remembered values.
///
/// Keys are unique; saving an existing key overwrites its value (last write
/// wins). Callers are expected to pass trimmed keys and values.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Saves `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<(), anyhow::Error>;

    /// Reads the value saved under `key`. Returns `None` if the key has never
    /// been saved; a missing key is not an error.
    async fn read(&self, key: &str) -> Result<Option<String>, anyhow::Error>;
}
