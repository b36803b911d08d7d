use crate::traits::Serializer;
use kanban_core::{KanbanError, KanbanResult};

/// Pretty-printed JSON, the format every stored key uses
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    /// Bytes that are not the expected JSON shape are malformed input, not
    /// an internal failure.
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T> {
        serde_json::from_slice(bytes).map_err(|e| KanbanError::MalformedInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::{Board, VisibleFields};

    #[test]
    fn test_board_keeps_wire_names() {
        let serializer = JsonSerializer;
        let bytes = serializer.serialize(&Board::sample()).unwrap();
        let json_str = String::from_utf8(bytes.clone()).unwrap();

        assert!(json_str.contains("\"columnOrder\""));
        assert!(json_str.contains("\"cardIds\""));
        assert!(json_str.contains('\n'));

        let board: Board = serializer.deserialize(&bytes).unwrap();
        assert_eq!(board.column_order().len(), 3);
    }

    #[test]
    fn test_malformed_bytes() {
        let serializer = JsonSerializer;
        let result: KanbanResult<VisibleFields> = serializer.deserialize(b"{ nope");
        assert!(result.unwrap_err().is_malformed_input());

        let result: KanbanResult<Board> = serializer.deserialize(br#"{"columns": 3}"#);
        assert!(result.unwrap_err().is_malformed_input());
    }
}
