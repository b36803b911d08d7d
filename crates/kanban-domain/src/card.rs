use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::field_update::FieldUpdate;
pub use crate::id::CardId;

pub const DEFAULT_CARD_TITLE: &str = "New task";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPriority {
    #[default]
    #[serde(rename = "")]
    None,
    Low,
    Medium,
    High,
}

impl CardPriority {
    pub const ALL: [CardPriority; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for CardPriority {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(KanbanError::MalformedInput(format!(
                "unknown priority '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: CardPriority,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// A card with the default title and every optional field empty.
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            title: DEFAULT_CARD_TITLE.to_string(),
            description: String::new(),
            assignee: String::new(),
            due_date: None,
            priority: CardPriority::None,
            // persisted as epoch millis, keep the in-memory value exact
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub(crate) fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at.trunc_subsecs(3);
        self
    }

    pub fn apply(&mut self, patch: CardPatch) {
        let CardPatch {
            title,
            description,
            assignee,
            due_date,
            priority,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(assignee) = assignee {
            self.assignee = assignee;
        }
        due_date.apply_to(&mut self.due_date);
        if let Some(priority) = priority {
            self.priority = priority;
        }
    }
}

/// Partial set of card fields. `id` and `createdAt` are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: FieldUpdate<NaiveDate>,
    pub priority: Option<CardPriority>,
}

impl CardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn due_date(mut self, due_date: FieldUpdate<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn priority(mut self, priority: CardPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.assignee.is_none()
            && !self.due_date.is_change()
            && self.priority.is_none()
    }
}

pub fn parse_due_date(raw: &str) -> KanbanResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, due_date_format::FORMAT)
        .map(Some)
        .map_err(|e| KanbanError::MalformedInput(format!("invalid due date '{}': {}", raw, e)))
}

/// `dueDate` travels as `YYYY-MM-DD`, or `""` when unset.
mod due_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&date.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
