use serde::{Deserialize, Serialize};

use crate::card::CardId;
pub use crate::id::ColumnId;

pub const DEFAULT_COLUMN_TITLE: &str = "New column";

/// A named bucket of cards. `card_ids` order is the visual order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            card_ids: Vec::new(),
        }
    }

    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }

    pub fn contains(&self, card_id: &CardId) -> bool {
        self.card_ids.contains(card_id)
    }

    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }
}
