use async_trait::async_trait;
use kanban_core::KanbanResult;

/// Trait for abstract key-value storage.
/// Values are opaque bytes; implementations decide where they live (files,
/// memory, ...). A missing key is `Ok(None)`, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`
    async fn load(&self, key: &str) -> KanbanResult<Option<Vec<u8>>>;

    /// Store `data` under `key`, replacing any previous value
    async fn save(&self, key: &str, data: &[u8]) -> KanbanResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> KanbanResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}
