use super::Command;
use crate::{Board, ColumnId};
use kanban_core::KanbanResult;

/// Create a new column at the end of the board
pub struct AddColumn {
    pub column_id: ColumnId,
    pub title: Option<String>,
}

impl AddColumn {
    pub fn new(title: Option<String>) -> Self {
        Self {
            column_id: ColumnId::generate(),
            title,
        }
    }
}

impl Command for AddColumn {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.add_column_with_id(self.column_id.clone(), self.title.clone())
    }

    fn description(&self) -> String {
        match &self.title {
            Some(title) => format!("Add column '{}'", title),
            None => format!("Add column {}", self.column_id),
        }
    }
}

/// Rename a column
pub struct RenameColumn {
    pub column_id: ColumnId,
    pub title: String,
}

impl Command for RenameColumn {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.rename_column(&self.column_id, self.title.clone())
    }

    fn description(&self) -> String {
        format!("Rename column {} to '{}'", self.column_id, self.title)
    }
}

/// Delete a column and the cards it holds
pub struct DeleteColumn {
    pub column_id: ColumnId,
}

impl Command for DeleteColumn {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.delete_column(&self.column_id)
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}

/// Replace the column order with a permutation of itself
pub struct ReorderColumns {
    pub order: Vec<ColumnId>,
}

impl Command for ReorderColumns {
    fn execute(&self, board: &Board) -> KanbanResult<Board> {
        board.reorder_columns(&self.order)
    }

    fn description(&self) -> String {
        let ids: Vec<&str> = self.order.iter().map(|id| id.as_str()).collect();
        format!("Reorder columns [{}]", ids.join(", "))
    }
}
