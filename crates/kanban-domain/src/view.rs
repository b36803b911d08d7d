//! Read-only projection of a board as the user sees it.

use serde::Serialize;

use crate::{Board, Card, CardId, Column, ColumnId, VisibleFields};

/// Optional card fields a board can show, in display order.
pub const DISPLAY_FIELDS: [&str; 4] = ["assignee", "dueDate", "priority", "description"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    pub fields: Vec<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub card_count: usize,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn new(board: &Board, visible: &VisibleFields) -> Self {
        let columns = board
            .ordered_columns()
            .map(|column| ColumnView::new(board, column, visible))
            .collect();
        Self { columns }
    }
}

impl ColumnView {
    fn new(board: &Board, column: &Column, visible: &VisibleFields) -> Self {
        let cards: Vec<_> = board
            .column_cards(&column.id)
            .map(|card| CardView::new(card, visible))
            .collect();
        Self {
            id: column.id.clone(),
            title: column.title.clone(),
            card_count: cards.len(),
            cards,
        }
    }
}

impl CardView {
    pub fn new(card: &Card, visible: &VisibleFields) -> Self {
        let fields = DISPLAY_FIELDS
            .iter()
            .filter(|name| visible.is_visible(name))
            .filter_map(|&name| {
                let value = match name {
                    "assignee" => card.assignee.clone(),
                    "dueDate" => card
                        .due_date
                        .map(|date| date.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                    "priority" => card.priority.as_str().to_string(),
                    "description" => card.description.clone(),
                    _ => String::new(),
                };
                (!value.is_empty()).then_some(FieldValue { name, value })
            })
            .collect();

        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
