//! Typed access to the three stored documents.

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use kanban_core::KanbanResult;
use kanban_domain::{Board, FieldSchema, VisibleFields};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub const BOARD_KEY: &str = "kanban-state";
pub const VISIBLE_FIELDS_KEY: &str = "kanban-visible-fields";
pub const FIELD_SCHEMA_KEY: &str = "kanbanFieldSchema";

/// Loads and saves the board, the visible-field toggles and the field
/// schema. Missing or unreadable documents fall back to their defaults;
/// only store failures are errors.
#[derive(Clone)]
pub struct BoardRepository {
    store: Arc<dyn KeyValueStore>,
    serializer: JsonSerializer,
}

impl BoardRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            serializer: JsonSerializer,
        }
    }

    async fn load_or<T, F>(&self, key: &str, default: F) -> KanbanResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> T,
    {
        let Some(bytes) = self.store.load(key).await? else {
            tracing::debug!("'{}' not stored yet, using default", key);
            return Ok(default());
        };

        match self.serializer.deserialize(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Ignoring unreadable '{}': {}", key, e);
                Ok(default())
            }
        }
    }

    async fn save_value<T>(&self, key: &str, value: &T) -> KanbanResult<()>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let bytes = self.serializer.serialize(value)?;
        self.store.save(key, &bytes).await
    }

    /// The stored board, or the sample board when none is stored or the
    /// stored one is inconsistent.
    pub async fn load_board(&self) -> KanbanResult<Board> {
        let board = self.load_or(BOARD_KEY, Board::sample).await?;
        if let Err(e) = board.validate() {
            tracing::warn!("Ignoring inconsistent '{}': {}", BOARD_KEY, e);
            return Ok(Board::sample());
        }
        Ok(board)
    }

    pub async fn save_board(&self, board: &Board) -> KanbanResult<()> {
        self.save_value(BOARD_KEY, board).await
    }

    /// Forget the stored board; the next load starts from the sample again
    pub async fn clear_board(&self) -> KanbanResult<()> {
        self.store.remove(BOARD_KEY).await
    }

    pub async fn load_visible_fields(&self) -> KanbanResult<VisibleFields> {
        self.load_or(VISIBLE_FIELDS_KEY, VisibleFields::default)
            .await
    }

    pub async fn save_visible_fields(&self, visible: &VisibleFields) -> KanbanResult<()> {
        self.save_value(VISIBLE_FIELDS_KEY, visible).await
    }

    /// The stored schema. A first load writes the template back so the
    /// document exists from then on.
    pub async fn load_field_schema(&self) -> KanbanResult<FieldSchema> {
        if self.store.load(FIELD_SCHEMA_KEY).await?.is_none() {
            let schema = FieldSchema::template();
            self.save_field_schema(&schema).await?;
            return Ok(schema);
        }
        self.load_or(FIELD_SCHEMA_KEY, FieldSchema::template).await
    }

    pub async fn save_field_schema(&self, schema: &FieldSchema) -> KanbanResult<()> {
        self.save_value(FIELD_SCHEMA_KEY, schema).await
    }
}
