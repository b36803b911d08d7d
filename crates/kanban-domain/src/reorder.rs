//! Ordered-collection helpers shared by column ordering and card ordering.
//!
//! Both the board's `column_order` and each column's `card_ids` are plain
//! sequences of ids, so every reposition goes through the same three
//! primitives here.

use kanban_core::{KanbanError, KanbanResult};
use std::fmt::Display;

/// Accepts `proposed` only if it holds exactly the same ids as `current`.
pub fn validate_permutation<T>(current: &[T], proposed: &[T], what: &str) -> KanbanResult<()>
where
    T: Ord + Clone + Display,
{
    if current.len() != proposed.len() {
        return Err(KanbanError::Validation(format!(
            "{} reorder has {} entries, expected {}",
            what,
            proposed.len(),
            current.len()
        )));
    }

    let mut expected = current.to_vec();
    let mut actual = proposed.to_vec();
    expected.sort();
    actual.sort();

    if let Some((want, got)) = expected.iter().zip(&actual).find(|(a, b)| a != b) {
        return Err(KanbanError::Validation(format!(
            "{} reorder does not match current ids (expected {}, found {})",
            what, want, got
        )));
    }
    Ok(())
}

/// Inserts `item` at `index`, clamped to the end. Returns the final index.
pub fn insert_clamped<T>(items: &mut Vec<T>, item: T, index: usize) -> usize {
    let at = index.min(items.len());
    items.insert(at, item);
    at
}

/// Copy of `order` with `item` moved to `to_index`.
///
/// `to_index` is read against the sequence after `item` has been taken out
/// and is clamped to its end. Returns `None` when `item` is not in `order`.
pub fn move_item<T>(order: &[T], item: &T, to_index: usize) -> Option<Vec<T>>
where
    T: PartialEq + Clone,
{
    let from = order.iter().position(|x| x == item)?;
    let mut next = order.to_vec();
    let moved = next.remove(from);
    insert_clamped(&mut next, moved, to_index);
    Some(next)
}
