use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Card fields shown on the board, keyed by field name. Fields without an
/// entry are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleFields {
    fields: BTreeMap<String, bool>,
}

impl Default for VisibleFields {
    fn default() -> Self {
        let fields = [
            ("assignee", true),
            ("dueDate", true),
            ("priority", true),
            ("description", false),
        ]
        .into_iter()
        .map(|(name, shown)| (name.to_string(), shown))
        .collect();
        Self { fields }
    }
}

impl VisibleFields {
    pub fn is_visible(&self, name: &str) -> bool {
        self.fields.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: impl Into<String>, shown: bool) {
        self.fields.insert(name.into(), shown);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.fields.iter().map(|(name, shown)| (name.as_str(), *shown))
    }
}
