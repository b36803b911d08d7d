use chrono::{Duration, Utc};
use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::card::{Card, CardId, CardPriority};
use crate::column::{Column, ColumnId};

/// Aggregate root: every column and card, plus the column order.
///
/// Fields are only reachable through the read accessors; the sole way to
/// derive a different board is through the operations in
/// [`operations`](crate::operations), which return a new value and leave
/// `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub(crate) columns: BTreeMap<ColumnId, Column>,
    pub(crate) column_order: Vec<ColumnId>,
    pub(crate) cards: BTreeMap<CardId, Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo board shown on first start and after a reset.
    pub fn sample() -> Self {
        let now = Utc::now();
        let mut board = Self::new();

        let columns = [
            ("todo", "To do", vec!["c1", "c2"]),
            ("doing", "In progress", vec!["c3"]),
            ("done", "Done", vec![]),
        ];
        for (id, title, card_ids) in columns {
            let id = ColumnId::from(id);
            let mut column = Column::new(id.clone(), title.to_string());
            column.card_ids = card_ids.into_iter().map(CardId::from).collect();
            board.columns.insert(id.clone(), column);
            board.column_order.push(id);
        }

        let cards = [
            (
                "c1",
                "Set up the project",
                "Scaffold the workspace and build.",
                "Ana",
                CardPriority::Medium,
                Duration::days(1),
            ),
            (
                "c2",
                "Design the columns",
                "Define the column and card structure.",
                "Luis",
                CardPriority::High,
                Duration::hours(2),
            ),
            (
                "c3",
                "Edit cards",
                "Allow editing card fields in place.",
                "",
                CardPriority::Low,
                Duration::minutes(30),
            ),
        ];
        for (id, title, description, assignee, priority, age) in cards {
            let mut card = Card::new(CardId::from(id)).with_created_at(now - age);
            card.title = title.to_string();
            card.description = description.to_string();
            card.assignee = assignee.to_string();
            card.priority = priority;
            board.cards.insert(card.id.clone(), card);
        }

        board
    }

    pub fn columns(&self) -> &BTreeMap<ColumnId, Column> {
        &self.columns
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    pub fn cards(&self) -> &BTreeMap<CardId, Card> {
        &self.cards
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Cards of a column in display order. Empty for an unknown column.
    pub fn column_cards<'a>(&'a self, id: &ColumnId) -> impl Iterator<Item = &'a Card> + 'a {
        self.columns
            .get(id)
            .into_iter()
            .flat_map(|column| column.card_ids.iter())
            .filter_map(|card_id| self.cards.get(card_id))
    }

    /// Owning column and index of a card.
    pub fn locate_card(&self, card_id: &CardId) -> Option<(&ColumnId, usize)> {
        self.columns.values().find_map(|column| {
            column
                .position_of(card_id)
                .map(|index| (&column.id, index))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.cards.is_empty()
    }

    /// Checks referential integrity:
    /// - `column_order` is a permutation of the column keys
    /// - the `card_ids` of all columns partition the card keys
    pub fn validate(&self) -> KanbanResult<()> {
        let malformed = |msg: String| Err(KanbanError::MalformedInput(msg));

        for (key, column) in &self.columns {
            if key != &column.id {
                return malformed(format!("column key {} holds column {}", key, column.id));
            }
        }
        for (key, card) in &self.cards {
            if key != &card.id {
                return malformed(format!("card key {} holds card {}", key, card.id));
            }
        }

        let mut ordered = HashSet::new();
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return malformed(format!("column order references missing column {}", id));
            }
            if !ordered.insert(id) {
                return malformed(format!("column {} appears twice in column order", id));
            }
        }
        if ordered.len() != self.columns.len() {
            return malformed(format!(
                "column order lists {} of {} columns",
                ordered.len(),
                self.columns.len()
            ));
        }

        let mut placed = HashSet::new();
        for column in self.columns.values() {
            for card_id in &column.card_ids {
                if !self.cards.contains_key(card_id) {
                    return malformed(format!(
                        "column {} references missing card {}",
                        column.id, card_id
                    ));
                }
                if !placed.insert(card_id) {
                    return malformed(format!("card {} is placed more than once", card_id));
                }
            }
        }
        if placed.len() != self.cards.len() {
            return malformed(format!(
                "{} card(s) are not placed in any column",
                self.cards.len() - placed.len()
            ));
        }

        Ok(())
    }
}
