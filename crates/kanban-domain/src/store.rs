//! The owner of the current board.

use kanban_core::{KanbanResult, LogEntry, Loggable};

use crate::commands::Command;
use crate::Board;

const MAX_ACTIVITY_ENTRIES: usize = 100;

/// Receives every committed board. Implementations must not block; the
/// store calls them synchronously after each change.
pub trait ChangeSink: Send {
    fn board_changed(&self, board: &Board);
}

/// Owns the board and funnels every mutation through [`Command`]s.
///
/// A command that fails leaves the board as it was. A command that
/// succeeds but yields an equal board is not counted as a change and does
/// not reach the sink.
pub struct BoardStore {
    board: Board,
    revision: u64,
    activity: Vec<LogEntry>,
    sink: Option<Box<dyn ChangeSink>>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            revision: 0,
            activity: Vec::new(),
            sink: None,
        }
    }

    pub fn with_sink(board: Board, sink: Box<dyn ChangeSink>) -> Self {
        let mut store = Self::new(board);
        store.sink = Some(sink);
        store
    }

    /// Detach the sink, e.g. to close a save channel during shutdown
    pub fn take_sink(&mut self) -> Option<Box<dyn ChangeSink>> {
        self.sink.take()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of committed changes since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Execute a command. Returns whether the board changed.
    pub fn execute(&mut self, command: &dyn Command) -> KanbanResult<bool> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let next = match command.execute(&self.board) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!("Rejected: {}: {}", description, e);
                return Err(e);
            }
        };

        if next == self.board {
            tracing::debug!("No change: {}", description);
            return Ok(false);
        }
        debug_assert!(
            next.validate().is_ok(),
            "command produced an inconsistent board: {}",
            description
        );

        self.board = next;
        self.revision += 1;
        self.add_log(description);

        if let Some(ref sink) = self.sink {
            sink.board_changed(&self.board);
        }
        Ok(true)
    }
}

impl Loggable for BoardStore {
    fn add_log(&mut self, message: String) {
        if self.activity.len() == MAX_ACTIVITY_ENTRIES {
            self.activity.remove(0);
        }
        self.activity.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.activity
    }
}
