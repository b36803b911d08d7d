//! Drag-and-drop reordering.
//!
//! A gesture is `Start → Enter* → Drop? → End`. The coordinator keeps the
//! descriptor of the gesture in flight and turns those events into Board
//! Store commands:
//!
//! - columns reorder live on every enter; drop adds nothing
//! - cards reorder live while hovering their own column; a cross-column
//!   move only happens on drop
//!
//! `End` always resets to [`GestureState::Idle`]. Changes applied live are
//! kept when a gesture is abandoned.
//!
//! A UI usually keeps one coordinator for column gestures and one for card
//! gestures; events that do not match the current gesture are ignored.

mod card_drag;
mod column_drag;
pub mod payload;

use kanban_core::KanbanResult;
use serde::{Deserialize, Serialize};

use crate::store::BoardStore;
use crate::{CardId, ColumnId};

pub use payload::TransferPayload;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    DraggingColumn {
        column_id: ColumnId,
    },
    DraggingCard {
        card_id: CardId,
        origin_column: ColumnId,
        /// Last known index of the card, updated by live reorders.
        origin_index: usize,
    },
}

/// One input event of a gesture, as delivered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    ColumnStart {
        column_id: ColumnId,
    },
    ColumnEnter {
        column_id: ColumnId,
    },
    ColumnDrop,
    CardStart {
        card_id: CardId,
        column_id: ColumnId,
        index: usize,
    },
    CardEnter {
        column_id: ColumnId,
        index: usize,
    },
    CardDrop {
        column_id: ColumnId,
        index: usize,
        #[serde(default)]
        transfer: Option<String>,
    },
    End,
}

#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: GestureState,
    /// One-shot marker so a duplicated drop delivery is ignored.
    drop_handled: bool,
    /// Encoded payload of the card gesture in flight, handed to drops that
    /// arrive without one.
    transfer: Option<String>,
}

/// Result of replaying an event sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Events that changed the board
    pub changes: usize,
    /// Events the board store rejected; the gesture carried on without them
    pub rejected: usize,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Terminal event of every gesture, dropped or not.
    pub fn end(&mut self) {
        if self.is_dragging() {
            tracing::debug!("Drag ended: {:?}", self.state);
        }
        self.state = GestureState::Idle;
        self.transfer = None;
    }

    /// Payload produced by the last card start, until the gesture ends.
    pub fn transfer(&self) -> Option<&str> {
        self.transfer.as_deref()
    }

    fn begin(&mut self, state: GestureState) {
        tracing::debug!("Drag started: {:?}", state);
        self.state = state;
        self.drop_handled = false;
        self.transfer = None;
    }

    /// Feed one event. Returns whether the board changed.
    pub fn handle(&mut self, store: &mut BoardStore, event: DragEvent) -> KanbanResult<bool> {
        match event {
            DragEvent::ColumnStart { column_id } => {
                self.start_column_drag(column_id);
                Ok(false)
            }
            DragEvent::ColumnEnter { column_id } => self.enter_column(store, &column_id),
            DragEvent::ColumnDrop => Ok(self.drop_column()),
            DragEvent::CardStart {
                card_id,
                column_id,
                index,
            } => {
                self.transfer = Some(self.start_card_drag(card_id, column_id, index)?);
                Ok(false)
            }
            DragEvent::CardEnter { column_id, index } => {
                self.enter_card_slot(store, &column_id, index)
            }
            DragEvent::CardDrop {
                column_id,
                index,
                transfer,
            } => {
                let transfer = transfer.or_else(|| self.transfer.clone());
                self.drop_card(store, &column_id, index, transfer.as_deref())
            }
            DragEvent::End => {
                self.end();
                Ok(false)
            }
        }
    }

    /// Feed a whole event sequence. A rejected event is logged and skipped,
    /// so later events (including `End`) are still delivered.
    pub fn replay(
        &mut self,
        store: &mut BoardStore,
        events: impl IntoIterator<Item = DragEvent>,
    ) -> ReplayOutcome {
        let mut outcome = ReplayOutcome::default();
        for event in events {
            match self.handle(store, event) {
                Ok(true) => outcome.changes += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Drag event rejected: {}", e);
                    outcome.rejected += 1;
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_end_always_resets() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start_column_drag(ColumnId::from("todo"));
        assert!(coordinator.is_dragging());

        coordinator.end();
        assert_eq!(coordinator.state(), &GestureState::Idle);

        // End while idle is harmless
        coordinator.end();
        assert!(!coordinator.is_dragging());
    }

    #[test]
    fn test_event_script_parses() {
        let json = r#"[
            {"event": "card_start", "card_id": "c1", "column_id": "todo", "index": 0},
            {"event": "card_enter", "column_id": "todo", "index": 1},
            {"event": "card_drop", "column_id": "doing", "index": 0},
            {"event": "end"}
        ]"#;
        let events: Vec<DragEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[2],
            DragEvent::CardDrop {
                column_id: ColumnId::from("doing"),
                index: 0,
                transfer: None,
            }
        );
    }

    #[test]
    fn test_replay_cross_column_gesture() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let events = vec![
            DragEvent::CardStart {
                card_id: CardId::from("c1"),
                column_id: ColumnId::from("todo"),
                index: 0,
            },
            DragEvent::CardEnter {
                column_id: ColumnId::from("doing"),
                index: 0,
            },
            DragEvent::CardDrop {
                column_id: ColumnId::from("doing"),
                index: 0,
                transfer: None,
            },
            DragEvent::End,
        ];

        let outcome = coordinator.replay(&mut store, events);

        assert_eq!(
            outcome,
            ReplayOutcome {
                changes: 1,
                rejected: 0
            }
        );
        assert_eq!(
            store.board().locate_card(&CardId::from("c1")),
            Some((&ColumnId::from("doing"), 0))
        );
        assert!(!coordinator.is_dragging());
    }

    #[test]
    fn test_rejected_drop_does_not_stop_replay() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        let stale = TransferPayload::new(CardId::from("c3"), ColumnId::from("todo"))
            .encode()
            .unwrap();
        let events = vec![
            DragEvent::CardStart {
                card_id: CardId::from("c1"),
                column_id: ColumnId::from("todo"),
                index: 0,
            },
            DragEvent::CardDrop {
                column_id: ColumnId::from("done"),
                index: 0,
                transfer: Some(stale),
            },
            DragEvent::End,
            DragEvent::ColumnStart {
                column_id: ColumnId::from("done"),
            },
            DragEvent::ColumnEnter {
                column_id: ColumnId::from("todo"),
            },
            DragEvent::End,
        ];

        let outcome = coordinator.replay(&mut store, events);

        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.changes, 1);
        assert!(!coordinator.is_dragging());
        assert_eq!(
            store.board().column_order(),
            &[
                ColumnId::from("done"),
                ColumnId::from("todo"),
                ColumnId::from("doing")
            ]
        );
        // the stale drop moved nothing
        assert_eq!(
            store.board().locate_card(&CardId::from("c3")),
            Some((&ColumnId::from("doing"), 0))
        );
    }

    #[test]
    fn test_card_start_payload_reaches_drop() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();

        coordinator
            .handle(
                &mut store,
                DragEvent::CardStart {
                    card_id: CardId::from("c2"),
                    column_id: ColumnId::from("todo"),
                    index: 1,
                },
            )
            .unwrap();
        let payload = TransferPayload::decode(coordinator.transfer().unwrap()).unwrap();
        assert_eq!(
            payload,
            TransferPayload::new(CardId::from("c2"), ColumnId::from("todo"))
        );

        let changed = coordinator
            .handle(
                &mut store,
                DragEvent::CardDrop {
                    column_id: ColumnId::from("done"),
                    index: 0,
                    transfer: None,
                },
            )
            .unwrap();
        assert!(changed);
        assert_eq!(
            store.board().locate_card(&CardId::from("c2")),
            Some((&ColumnId::from("done"), 0))
        );

        coordinator.handle(&mut store, DragEvent::End).unwrap();
        assert!(coordinator.transfer().is_none());
    }

    #[test]
    fn test_column_start_clears_card_payload() {
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();
        coordinator
            .handle(
                &mut store,
                DragEvent::CardStart {
                    card_id: CardId::from("c1"),
                    column_id: ColumnId::from("todo"),
                    index: 0,
                },
            )
            .unwrap();
        assert!(coordinator.transfer().is_some());

        coordinator
            .handle(
                &mut store,
                DragEvent::ColumnStart {
                    column_id: ColumnId::from("doing"),
                },
            )
            .unwrap();
        assert!(coordinator.transfer().is_none());
    }
}
