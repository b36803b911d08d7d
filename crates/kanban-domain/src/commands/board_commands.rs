use super::Command;
use crate::Board;
use kanban_core::KanbanResult;

/// Replace the whole board, e.g. with a loaded or demo board
pub struct InitBoard {
    pub board: Board,
}

impl InitBoard {
    pub fn sample() -> Self {
        Self {
            board: Board::sample(),
        }
    }
}

impl Command for InitBoard {
    fn execute(&self, _board: &Board) -> KanbanResult<Board> {
        self.board.validate()?;
        Ok(self.board.clone())
    }

    fn description(&self) -> String {
        format!(
            "Initialize board with {} columns and {} cards",
            self.board.columns().len(),
            self.board.cards().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_replaces_board() {
        let command = InitBoard::sample();
        let next = command.execute(&Board::new()).unwrap();
        assert_eq!(next, command.board);
        assert_eq!(next.column_order().len(), 3);
    }

    #[test]
    fn test_init_rejects_inconsistent_board() {
        let json = r#"{"columns":{},"columnOrder":["ghost"],"cards":{}}"#;
        let board: Board = serde_json::from_str(json).unwrap();
        let err = InitBoard { board }.execute(&Board::new()).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
