use kanban_core::{AppConfig, KanbanError, KanbanResult};
use kanban_domain::commands::Command;
use kanban_domain::{Board, BoardStore, CardId, ColumnId};
use kanban_persistence::{BoardRepository, JsonFileStore, SaveWorker};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One CLI invocation: the loaded board, the store that owns it, and the
/// background worker saving every change.
pub struct CliContext {
    pub config: AppConfig,
    pub repository: BoardRepository,
    store: BoardStore,
    save_handle: Option<JoinHandle<usize>>,
}

impl CliContext {
    pub async fn load(data_dir: Option<PathBuf>) -> KanbanResult<Self> {
        let config = AppConfig::load();
        let dir = data_dir.unwrap_or_else(|| config.effective_data_dir());
        tracing::info!("Using data directory {}", dir.display());

        let repository = BoardRepository::new(Arc::new(JsonFileStore::new(&dir)));
        let board = repository.load_board().await?;
        let (queue, save_handle) = SaveWorker::spawn(repository.clone());

        Ok(Self {
            config,
            repository,
            store: BoardStore::with_sink(board, Box::new(queue)),
            save_handle: Some(save_handle),
        })
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn execute(&mut self, command: &dyn Command) -> KanbanResult<bool> {
        self.store.execute(command)
    }

    pub fn default_column_title(&self) -> String {
        self.config.effective_column_title().to_string()
    }

    pub fn default_card_title(&self) -> String {
        self.config.effective_card_title().to_string()
    }

    pub fn require_column(&self, id: &ColumnId) -> KanbanResult<()> {
        match self.board().column(id) {
            Some(_) => Ok(()),
            None => Err(KanbanError::column_not_found(id)),
        }
    }

    pub fn require_card(&self, id: &CardId) -> KanbanResult<()> {
        match self.board().card(id) {
            Some(_) => Ok(()),
            None => Err(KanbanError::card_not_found(id)),
        }
    }

    /// Close the save channel and wait until every queued board is written
    pub async fn finish(mut self) -> KanbanResult<()> {
        drop(self.store.take_sink());
        if let Some(handle) = self.save_handle.take() {
            let saved = handle
                .await
                .map_err(|e| KanbanError::Internal(format!("save worker failed: {}", e)))?;
            tracing::debug!("Saved {} board snapshots", saved);
        }
        Ok(())
    }
}
