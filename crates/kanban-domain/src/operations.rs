//! Board Store operations.
//!
//! Every operation borrows the current board and returns a new one. A
//! failed precondition returns an error before anything is copied, so the
//! caller's board is never partially mutated.

use kanban_core::{KanbanError, KanbanResult};

use crate::board::Board;
use crate::card::{Card, CardId, CardPatch};
use crate::column::{Column, ColumnId, DEFAULT_COLUMN_TITLE};
use crate::reorder;

impl Board {
    /// Appends a column with a fresh id. A missing or blank title falls
    /// back to the default.
    pub fn add_column(&self, title: Option<String>) -> KanbanResult<Board> {
        self.add_column_with_id(ColumnId::generate(), title)
    }

    pub fn add_column_with_id(&self, id: ColumnId, title: Option<String>) -> KanbanResult<Board> {
        if id.is_blank() {
            return Err(KanbanError::Validation("column id must not be blank".into()));
        }
        if self.columns.contains_key(&id) {
            return Err(KanbanError::Validation(format!("column {} already exists", id)));
        }

        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_COLUMN_TITLE.to_string());

        let mut next = self.clone();
        next.columns
            .insert(id.clone(), Column::new(id.clone(), title));
        next.column_order.push(id);
        Ok(next)
    }

    pub fn rename_column(&self, id: &ColumnId, title: impl Into<String>) -> KanbanResult<Board> {
        if !self.columns.contains_key(id) {
            return Err(KanbanError::column_not_found(id));
        }

        let mut next = self.clone();
        if let Some(column) = next.columns.get_mut(id) {
            column.title = title.into();
        }
        Ok(next)
    }

    /// Removes a column together with every card it holds.
    pub fn delete_column(&self, id: &ColumnId) -> KanbanResult<Board> {
        let Some(column) = self.columns.get(id) else {
            return Err(KanbanError::column_not_found(id));
        };

        let mut next = self.clone();
        for card_id in &column.card_ids {
            next.cards.remove(card_id);
        }
        next.columns.remove(id);
        next.column_order.retain(|c| c != id);
        Ok(next)
    }

    pub fn reorder_columns(&self, new_order: &[ColumnId]) -> KanbanResult<Board> {
        reorder::validate_permutation(&self.column_order, new_order, "column")?;

        let mut next = self.clone();
        next.column_order = new_order.to_vec();
        Ok(next)
    }

    /// Appends a new card to a column. `fields` overrides the defaults.
    pub fn add_card(&self, column_id: &ColumnId, fields: CardPatch) -> KanbanResult<Board> {
        self.add_card_with_id(CardId::generate(), column_id, fields)
    }

    pub fn add_card_with_id(
        &self,
        card_id: CardId,
        column_id: &ColumnId,
        fields: CardPatch,
    ) -> KanbanResult<Board> {
        if !self.columns.contains_key(column_id) {
            return Err(KanbanError::column_not_found(column_id));
        }
        if card_id.is_blank() {
            return Err(KanbanError::Validation("card id must not be blank".into()));
        }
        if self.cards.contains_key(&card_id) {
            return Err(KanbanError::Validation(format!("card {} already exists", card_id)));
        }

        let mut card = Card::new(card_id.clone());
        card.apply(fields);

        let mut next = self.clone();
        next.cards.insert(card_id.clone(), card);
        if let Some(column) = next.columns.get_mut(column_id) {
            column.card_ids.push(card_id);
        }
        Ok(next)
    }

    /// Replaces the fields named in `patch`; `id` and `created_at` are kept.
    pub fn update_card(&self, card_id: &CardId, patch: CardPatch) -> KanbanResult<Board> {
        if !self.cards.contains_key(card_id) {
            return Err(KanbanError::card_not_found(card_id));
        }

        let mut next = self.clone();
        if let Some(card) = next.cards.get_mut(card_id) {
            card.apply(patch);
        }
        Ok(next)
    }

    pub fn delete_card(&self, card_id: &CardId, column_id: &ColumnId) -> KanbanResult<Board> {
        let Some(column) = self.columns.get(column_id) else {
            return Err(KanbanError::column_not_found(column_id));
        };
        if !self.cards.contains_key(card_id) {
            return Err(KanbanError::card_not_found(card_id));
        }
        if !column.contains(card_id) {
            return Err(KanbanError::NotFound(format!(
                "card {} in column {}",
                card_id, column_id
            )));
        }

        let mut next = self.clone();
        next.cards.remove(card_id);
        if let Some(column) = next.columns.get_mut(column_id) {
            column.card_ids.retain(|id| id != card_id);
        }
        Ok(next)
    }

    /// Moves a card to `to_index` of the destination column, clamped to
    /// the destination length after the card has been taken out.
    ///
    /// An unknown column on either side leaves the board as it is; a card
    /// that is not in `from_column_id` is `NotFound`.
    pub fn move_card(
        &self,
        card_id: &CardId,
        from_column_id: &ColumnId,
        to_column_id: &ColumnId,
        to_index: usize,
    ) -> KanbanResult<Board> {
        let (Some(from), Some(_)) = (
            self.columns.get(from_column_id),
            self.columns.get(to_column_id),
        ) else {
            tracing::debug!(
                "Ignoring move of card {}: unknown column {} or {}",
                card_id,
                from_column_id,
                to_column_id
            );
            return Ok(self.clone());
        };
        if !self.cards.contains_key(card_id) {
            return Err(KanbanError::card_not_found(card_id));
        }
        if !from.contains(card_id) {
            return Err(KanbanError::NotFound(format!(
                "card {} in column {}",
                card_id, from_column_id
            )));
        }

        let mut next = self.clone();
        if from_column_id == to_column_id {
            let column = next
                .columns
                .get_mut(from_column_id)
                .ok_or_else(|| KanbanError::column_not_found(from_column_id))?;
            column.card_ids = reorder::move_item(&column.card_ids, card_id, to_index)
                .ok_or_else(|| KanbanError::card_not_found(card_id))?;
        } else {
            if let Some(source) = next.columns.get_mut(from_column_id) {
                source.card_ids.retain(|id| id != card_id);
            }
            if let Some(target) = next.columns.get_mut(to_column_id) {
                reorder::insert_clamped(&mut target.card_ids, card_id.clone(), to_index);
            }
        }
        Ok(next)
    }

    pub fn reorder_cards_within_column(
        &self,
        column_id: &ColumnId,
        new_order: &[CardId],
    ) -> KanbanResult<Board> {
        let Some(column) = self.columns.get(column_id) else {
            return Err(KanbanError::column_not_found(column_id));
        };
        reorder::validate_permutation(&column.card_ids, new_order, "card")?;

        let mut next = self.clone();
        if let Some(column) = next.columns.get_mut(column_id) {
            column.card_ids = new_order.to_vec();
        }
        Ok(next)
    }
}
