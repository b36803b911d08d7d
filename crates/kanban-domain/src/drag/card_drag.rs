use kanban_core::KanbanResult;

use super::{DragCoordinator, GestureState, TransferPayload};
use crate::commands::{MoveCard, ReorderCards};
use crate::reorder;
use crate::store::BoardStore;
use crate::{CardId, ColumnId};

impl DragCoordinator {
    /// Records the descriptor and returns the encoded payload the UI hands
    /// to the drop target.
    pub fn start_card_drag(
        &mut self,
        card_id: CardId,
        origin_column: ColumnId,
        origin_index: usize,
    ) -> KanbanResult<String> {
        let payload = TransferPayload::new(card_id.clone(), origin_column.clone());
        self.begin(GestureState::DraggingCard {
            card_id,
            origin_column,
            origin_index,
        });
        payload.encode()
    }

    /// Live reorder while hovering the card's own column. Hovering another
    /// column changes nothing until the drop.
    pub fn enter_card_slot(
        &mut self,
        store: &mut BoardStore,
        column_id: &ColumnId,
        index: usize,
    ) -> KanbanResult<bool> {
        let GestureState::DraggingCard {
            card_id,
            origin_column,
            ..
        } = &self.state
        else {
            return Ok(false);
        };
        if origin_column != column_id {
            return Ok(false);
        }

        let Some(column) = store.board().column(column_id) else {
            return Ok(false);
        };
        let Some(from) = column.position_of(card_id) else {
            return Ok(false);
        };
        let Some(order) = reorder::move_item(&column.card_ids, card_id, index) else {
            return Ok(false);
        };
        let to = order.iter().position(|id| id == card_id).unwrap_or(from);
        if to == from {
            return Ok(false);
        }

        let changed = store.execute(&ReorderCards {
            column_id: column_id.clone(),
            order,
        })?;
        if let GestureState::DraggingCard { origin_index, .. } = &mut self.state {
            *origin_index = to;
        }
        Ok(changed)
    }

    /// Resolves the dragged card from the transfer payload, falling back to
    /// the tracked descriptor when the payload is missing or unreadable.
    pub fn drop_card(
        &mut self,
        store: &mut BoardStore,
        to_column: &ColumnId,
        to_index: usize,
        transfer: Option<&str>,
    ) -> KanbanResult<bool> {
        if self.drop_handled {
            tracing::debug!("Ignoring repeated drop on column {}", to_column);
            return Ok(false);
        }

        let tracked = match &self.state {
            GestureState::DraggingCard {
                card_id,
                origin_column,
                origin_index,
            } => Some((
                TransferPayload::new(card_id.clone(), origin_column.clone()),
                *origin_index,
            )),
            _ => None,
        };

        let payload = match transfer.map(TransferPayload::decode) {
            Some(Ok(payload)) => Some(payload),
            Some(Err(e)) => {
                tracing::debug!("{}; falling back to tracked drag", e);
                tracked.as_ref().map(|(payload, _)| payload.clone())
            }
            None => tracked.as_ref().map(|(payload, _)| payload.clone()),
        };
        let Some(payload) = payload else {
            tracing::debug!("Ignoring drop on column {}: nothing is being dragged", to_column);
            return Ok(false);
        };
        self.drop_handled = true;

        if let Some((origin, index)) = &tracked {
            if &origin.from_column_id == to_column && *index == to_index {
                // already in place from live reordering
                return Ok(false);
            }
        }

        store.execute(&MoveCard {
            card_id: payload.card_id,
            from_column_id: payload.from_column_id,
            to_column_id: to_column.clone(),
            to_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn ids(store: &BoardStore, column: &str) -> Vec<String> {
        store
            .board()
            .column(&ColumnId::from(column))
            .unwrap()
            .card_ids
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    fn col(id: &str) -> ColumnId {
        ColumnId::from(id)
    }

    #[test]
    fn test_start_returns_payload() {
        let mut coordinator = DragCoordinator::new();
        let raw = coordinator
            .start_card_drag(CardId::from("c3"), col("doing"), 0)
            .unwrap();
        assert_eq!(
            TransferPayload::decode(&raw).unwrap(),
            TransferPayload::new(CardId::from("c3"), col("doing"))
        );
        assert_eq!(
            coordinator.state(),
            &GestureState::DraggingCard {
                card_id: CardId::from("c3"),
                origin_column: col("doing"),
                origin_index: 0,
            }
        );
    }

    #[test]
    fn test_same_column_live_reorder_then_drop_is_noop() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let raw = coordinator
            .start_card_drag(CardId::from("c1"), col("todo"), 0)
            .unwrap();

        assert!(coordinator
            .enter_card_slot(&mut store, &col("todo"), 1)
            .unwrap());
        assert_eq!(ids(&store, "todo"), vec!["c2", "c1"]);
        assert!(matches!(
            coordinator.state(),
            GestureState::DraggingCard { origin_index: 1, .. }
        ));

        let revision = store.revision();
        assert!(!coordinator
            .drop_card(&mut store, &col("todo"), 1, Some(&raw))
            .unwrap());
        assert_eq!(store.revision(), revision);
        coordinator.end();
        assert_eq!(ids(&store, "todo"), vec!["c2", "c1"]);
    }

    #[test]
    fn test_enter_same_slot_does_nothing() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        coordinator
            .start_card_drag(CardId::from("c2"), col("todo"), 1)
            .unwrap();

        assert!(!coordinator
            .enter_card_slot(&mut store, &col("todo"), 1)
            .unwrap());
        // past the end clamps onto the current slot
        assert!(!coordinator
            .enter_card_slot(&mut store, &col("todo"), 2)
            .unwrap());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_cross_column_hover_does_not_mutate() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        coordinator
            .start_card_drag(CardId::from("c1"), col("todo"), 0)
            .unwrap();

        assert!(!coordinator
            .enter_card_slot(&mut store, &col("doing"), 0)
            .unwrap());
        assert!(!coordinator
            .enter_card_slot(&mut store, &col("done"), 0)
            .unwrap());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_cross_column_drop_moves_card() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let raw = coordinator
            .start_card_drag(CardId::from("c1"), col("todo"), 0)
            .unwrap();

        assert!(coordinator
            .drop_card(&mut store, &col("doing"), 0, Some(&raw))
            .unwrap());
        coordinator.end();

        assert_eq!(ids(&store, "todo"), vec!["c2"]);
        assert_eq!(ids(&store, "doing"), vec!["c1", "c3"]);
    }

    #[test]
    fn test_malformed_payload_falls_back_to_descriptor() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        coordinator
            .start_card_drag(CardId::from("c3"), col("doing"), 0)
            .unwrap();

        assert!(coordinator
            .drop_card(&mut store, &col("done"), 0, Some("{not json"))
            .unwrap());

        assert!(ids(&store, "doing").is_empty());
        assert_eq!(ids(&store, "done"), vec!["c3"]);
    }

    #[test]
    fn test_drop_without_payload_or_descriptor_is_ignored() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();

        assert!(!coordinator
            .drop_card(&mut store, &col("done"), 0, Some("garbage"))
            .unwrap());
        assert!(!coordinator
            .drop_card(&mut store, &col("done"), 0, None)
            .unwrap());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_payload_alone_is_enough() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let raw = TransferPayload::new(CardId::from("c2"), col("todo"))
            .encode()
            .unwrap();

        assert!(coordinator
            .drop_card(&mut store, &col("done"), 0, Some(&raw))
            .unwrap());
        assert_eq!(ids(&store, "done"), vec!["c2"]);
    }

    #[test]
    fn test_duplicate_drop_is_ignored_until_next_start() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let raw = coordinator
            .start_card_drag(CardId::from("c1"), col("todo"), 0)
            .unwrap();

        assert!(coordinator
            .drop_card(&mut store, &col("done"), 0, Some(&raw))
            .unwrap());
        assert!(!coordinator
            .drop_card(&mut store, &col("doing"), 0, Some(&raw))
            .unwrap());
        coordinator.end();
        assert_eq!(ids(&store, "done"), vec!["c1"]);

        let raw = coordinator
            .start_card_drag(CardId::from("c1"), col("done"), 0)
            .unwrap();
        assert!(coordinator
            .drop_card(&mut store, &col("doing"), 0, Some(&raw))
            .unwrap());
        assert_eq!(ids(&store, "doing"), vec!["c1", "c3"]);
    }

    #[test]
    fn test_stale_payload_is_rejected_without_change() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let raw = TransferPayload::new(CardId::from("c3"), col("todo"))
            .encode()
            .unwrap();

        let err = coordinator
            .drop_card(&mut store, &col("done"), 0, Some(&raw))
            .unwrap_err();
        assert!(err.is_not_found());
        store.board().validate().unwrap();
        assert_eq!(ids(&store, "doing"), vec!["c3"]);
    }

    #[test]
    fn test_column_gesture_ignores_card_events() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        coordinator.start_column_drag(col("todo"));

        assert!(!coordinator
            .enter_card_slot(&mut store, &col("todo"), 1)
            .unwrap());
        assert!(!coordinator
            .drop_card(&mut store, &col("todo"), 1, None)
            .unwrap());
        assert_eq!(store.revision(), 0);
    }
}
