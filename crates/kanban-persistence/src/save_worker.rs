//! Background saving of committed boards.

use crate::repository::BoardRepository;
use kanban_domain::{Board, ChangeSink};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sending half of the save channel. Plugged into a `BoardStore` as its
/// change sink; dropping it lets the worker drain and exit.
#[derive(Clone)]
pub struct SaveQueue {
    tx: mpsc::UnboundedSender<Board>,
}

impl SaveQueue {
    /// Queue a snapshot; never blocks
    pub fn queue(&self, board: Board) {
        match self.tx.send(board) {
            Ok(_) => {
                tracing::debug!("Snapshot queued successfully");
            }
            Err(_) => {
                tracing::error!("Failed to queue save: channel closed");
            }
        }
    }
}

impl ChangeSink for SaveQueue {
    fn board_changed(&self, board: &Board) {
        self.queue(board.clone());
    }
}

pub struct SaveWorker;

impl SaveWorker {
    /// Spawn the worker on the current runtime. The handle resolves to the
    /// number of snapshots saved once every queue has been dropped.
    pub fn spawn(repository: BoardRepository) -> (SaveQueue, JoinHandle<usize>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Board>();

        let handle = tokio::spawn(async move {
            let mut saved = 0;
            while let Some(board) = rx.recv().await {
                match repository.save_board(&board).await {
                    Ok(()) => saved += 1,
                    Err(e) => tracing::error!("Failed to save board: {}", e),
                }
            }
            tracing::debug!("Save worker finished after {} saves", saved);
            saved
        });

        (SaveQueue { tx }, handle)
    }
}
