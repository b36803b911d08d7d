use kanban_core::KanbanResult;

use crate::Board;

pub mod board_commands;
pub mod card_commands;
pub mod column_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use column_commands::*;

/// A Board Store operation captured as a value.
/// Commands represent intent: they read the current board and produce the
/// next one, leaving the input untouched when they fail.
pub trait Command: Send + Sync {
    /// Compute the board that results from applying this command
    fn execute(&self, board: &Board) -> KanbanResult<Board>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
