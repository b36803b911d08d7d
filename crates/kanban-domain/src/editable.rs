use crate::card::parse_due_date;
use crate::{Card, CardPatch, CardPriority, FieldUpdate};
use kanban_core::{Editable, KanbanResult};
use serde::{Deserialize, Serialize};

/// Editor form for a card: every editable field as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardForm {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: String,
    pub priority: String,
}

impl Editable<Card> for CardForm {
    type Patch = CardPatch;

    fn from_entity(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            assignee: card.assignee.clone(),
            due_date: card
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority: card.priority.as_str().to_string(),
        }
    }

    fn into_patch(self) -> KanbanResult<CardPatch> {
        let due_date = match parse_due_date(&self.due_date)? {
            Some(date) => FieldUpdate::Set(date),
            None => FieldUpdate::Clear,
        };
        let priority: CardPriority = self.priority.parse()?;

        Ok(CardPatch::new()
            .title(self.title.trim())
            .description(self.description)
            .assignee(self.assignee.trim())
            .due_date(due_date)
            .priority(priority))
    }
}
