use kanban_core::KanbanResult;

use super::{DragCoordinator, GestureState};
use crate::commands::ReorderColumns;
use crate::reorder;
use crate::store::BoardStore;
use crate::ColumnId;

impl DragCoordinator {
    pub fn start_column_drag(&mut self, column_id: ColumnId) {
        self.begin(GestureState::DraggingColumn { column_id });
    }

    /// Moves the dragged column into the slot of `target` right away, so the
    /// order follows the pointer.
    pub fn enter_column(&mut self, store: &mut BoardStore, target: &ColumnId) -> KanbanResult<bool> {
        let GestureState::DraggingColumn { column_id } = &self.state else {
            return Ok(false);
        };
        if column_id == target {
            return Ok(false);
        }

        let order = store.board().column_order();
        let Some(to_index) = order.iter().position(|id| id == target) else {
            return Ok(false);
        };
        let Some(order) = reorder::move_item(order, column_id, to_index) else {
            return Ok(false);
        };

        store.execute(&ReorderColumns { order })
    }

    /// The order is already final from the last enter.
    pub fn drop_column(&mut self) -> bool {
        false
    }
}
