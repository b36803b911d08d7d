use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use kanban_core::{KanbanError, KanbanResult};
use std::path::{Path, PathBuf};

/// Directory-backed key-value store.
/// Every key is one `<key>.json` file in the data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that backs `key`. Keys are limited to `[A-Za-z0-9_-]` so they
    /// can never escape the data directory.
    pub fn path_for(&self, key: &str) -> KanbanResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KanbanError::Validation(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn load(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        let data = AtomicWriter::read_all(&path).await?;
        if data.is_none() {
            tracing::debug!("No stored value for '{}' at {}", key, path.display());
        }
        Ok(data)
    }

    async fn save(&self, key: &str, data: &[u8]) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, data).await?;
        tracing::info!("Saved {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::remove(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("kanban-state", b"{\"a\": 1}").await.unwrap();
        assert!(dir.path().join("kanban-state.json").exists());

        let loaded = store.load("kanban-state").await.unwrap();
        assert_eq!(loaded, Some(b"{\"a\": 1}".to_vec()));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("not-created-yet"));

        assert_eq!(store.load("kanbanFieldSchema").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("kanban-visible-fields", b"{}").await.unwrap();
        store.remove("kanban-visible-fields").await.unwrap();
        assert_eq!(store.load("kanban-visible-fields").await.unwrap(), None);

        // twice is fine
        store.remove("kanban-visible-fields").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_unsafe_keys() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "with space", "dot.json"] {
            let err = store.save(key, b"{}").await.unwrap_err();
            assert!(err.is_validation(), "key {:?} should be rejected", key);
        }
    }
}
