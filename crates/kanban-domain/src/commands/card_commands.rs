use super::Command;
use crate::{Board, CardId, CardPatch, ColumnId};
use kanban_core::KanbanResult;

/// Create a new card at the end of a column
pub struct AddCard {
    pub card_id: CardId,
    pub column_id: ColumnId,
    pub fields: CardPatch,
}

impl AddCard {
    pub fn new(column_id: ColumnId, fields: CardPatch) -> Self {
        Self {
            card_id: CardId::generate(),
            column_id,
            fields,
        }
    }
}

impl Command for AddCard {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.add_card_with_id(self.card_id.clone(), &self.column_id, self.fields.clone())
    }

    fn description(&self) -> String {
        format!("Add card {} to column {}", self.card_id, self.column_id)
    }
}

/// Update card fields (title, description, assignee, due date, priority)
pub struct UpdateCard {
    pub card_id: CardId,
    pub patch: CardPatch,
}

impl Command for UpdateCard {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.update_card(&self.card_id, self.patch.clone())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Delete a card from the column that owns it
pub struct DeleteCard {
    pub card_id: CardId,
    pub column_id: ColumnId,
}

impl Command for DeleteCard {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.delete_card(&self.card_id, &self.column_id)
    }

    fn description(&self) -> String {
        format!("Delete card {} from column {}", self.card_id, self.column_id)
    }
}

/// Move card to a position in the same or a different column
pub struct MoveCard {
    pub card_id: CardId,
    pub from_column_id: ColumnId,
    pub to_column_id: ColumnId,
    pub to_index: usize,
}

impl Command for MoveCard {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.move_card(
            &self.card_id,
            &self.from_column_id,
            &self.to_column_id,
            self.to_index,
        )
    }

    fn description(&self) -> String {
        format!(
            "Move card {} from column {} to column {} at {}",
            self.card_id, self.from_column_id, self.to_column_id, self.to_index
        )
    }
}

/// Replace a column's card order with a permutation of itself
pub struct ReorderCards {
    pub column_id: ColumnId,
    pub order: Vec<CardId>,
}

impl Command for ReorderCards {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.reorder_cards_within_column(&self.column_id, &self.order)
    }

    fn description(&self) -> String {
        format!("Reorder cards in column {}", self.column_id)
    }
}
