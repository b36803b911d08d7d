use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};

use crate::{CardId, ColumnId};

/// Data handed from the drag source to the drop target of a card gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    pub card_id: CardId,
    pub from_column_id: ColumnId,
}

impl TransferPayload {
    pub fn new(card_id: CardId, from_column_id: ColumnId) -> Self {
        Self {
            card_id,
            from_column_id,
        }
    }

    pub fn encode(&self) -> KanbanResult<String> {
        serde_json::to_string(self).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    /// Both ids are required and must be non-blank.
    pub fn decode(raw: &str) -> KanbanResult<Self> {
        let payload: Self = serde_json::from_str(raw)
            .map_err(|e| KanbanError::MalformedInput(format!("transfer payload: {}", e)))?;
        if payload.card_id.is_blank() || payload.from_column_id.is_blank() {
            return Err(KanbanError::MalformedInput(
                "transfer payload has a blank id".to_string(),
            ));
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let payload = TransferPayload::new(CardId::from("c3"), ColumnId::from("doing"));
        assert_eq!(
            payload.encode().unwrap(),
            r#"{"cardId":"c3","fromColumnId":"doing"}"#
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(TransferPayload::decode("not json")
            .unwrap_err()
            .is_malformed_input());
        assert!(TransferPayload::decode(r#"{"cardId":"c3"}"#).is_err());
        assert!(TransferPayload::decode(r#"{"cardId":"","fromColumnId":"doing"}"#).is_err());
        assert!(TransferPayload::decode("").is_err());
    }
}
