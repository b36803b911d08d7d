//! Catalog of card fields and the per-user schema toggles built from it.

use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    User,
    Date,
    Number,
    MultiSelect,
    List,
    File,
    Formula,
    Color,
    Image,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::User => "user",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::MultiSelect => "multi-select",
            FieldType::List => "list",
            FieldType::File => "file",
            FieldType::Formula => "formula",
            FieldType::Color => "color",
            FieldType::Image => "image",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Which of the two display toggles to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFlag {
    ShowInKanban,
    ShowInEditor,
}

impl std::str::FromStr for FieldFlag {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(&['-', '_'][..], "").as_str() {
            "kanban" | "showinkanban" => Ok(FieldFlag::ShowInKanban),
            "editor" | "showineditor" => Ok(FieldFlag::ShowInEditor),
            _ => Err(KanbanError::MalformedInput(format!(
                "Unknown field flag '{}', expected kanban or editor",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub description: String,
    #[serde(default)]
    pub show_in_kanban: bool,
    #[serde(default)]
    pub show_in_editor: bool,
    #[serde(default)]
    pub editable: bool,
}

impl FieldDefinition {
    pub fn flag(&self, flag: FieldFlag) -> bool {
        match flag {
            FieldFlag::ShowInKanban => self.show_in_kanban,
            FieldFlag::ShowInEditor => self.show_in_editor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub group: String,
    pub fields: Vec<FieldDefinition>,
}

// (name, label, type, description, show_in_kanban, show_in_editor, editable)
type Template = (&'static str, &'static str, FieldType, &'static str, bool, bool, bool);

const CORE: &[Template] = &[
    ("title", "Title", FieldType::Text, "Short name or summary of the card", true, true, false),
    ("description", "Description", FieldType::Textarea, "Detailed explanation or notes", false, true, true),
    ("status", "Status", FieldType::Select, "Current workflow state (Todo, Doing, Done)", true, true, true),
    ("assignee", "Assignee", FieldType::User, "Person responsible for this task", true, true, true),
    ("priority", "Priority", FieldType::Select, "Importance level of the task", true, true, true),
    ("dueDate", "Due Date", FieldType::Date, "Deadline for completion", true, true, true),
    ("startDate", "Start Date", FieldType::Date, "When work should start", false, true, true),
    ("createdAt", "Created At", FieldType::Date, "Date the card was created", false, true, false),
    ("updatedAt", "Updated At", FieldType::Date, "Last time the card was modified", false, true, false),
];

const TIME_TRACKING: &[Template] = &[
    ("estimate", "Estimate", FieldType::Number, "Estimated effort (hours or points)", false, false, true),
    ("timeSpent", "Time Spent", FieldType::Number, "Actual work time logged", false, false, true),
    ("deadline", "Deadline", FieldType::Date, "Strict final due date", false, false, true),
    ("targetDate", "Target Date", FieldType::Date, "Goal or SLA completion date", false, false, true),
];

const PEOPLE: &[Template] = &[
    ("reporter", "Reporter", FieldType::User, "Who created the card", false, false, true),
    ("reviewer", "Reviewer", FieldType::User, "Person responsible for review or QA", false, false, true),
    ("followers", "Followers", FieldType::MultiSelect, "Users watching this card", false, false, true),
    ("team", "Team", FieldType::Select, "Team or department assigned", false, false, true),
];

const CLASSIFICATION: &[Template] = &[
    ("labels", "Labels / Tags", FieldType::MultiSelect, "Flexible categories or tags", false, false, true),
    ("category", "Category", FieldType::Select, "Main classification of this card", false, false, true),
    ("project", "Project / Epic", FieldType::Select, "Parent project or epic", false, false, true),
    ("sprint", "Sprint / Iteration", FieldType::Select, "Current agile iteration", false, false, true),
    ("version", "Version / Milestone", FieldType::Text, "Release or milestone target", false, false, true),
];

const TASK_MANAGEMENT: &[Template] = &[
    ("checklist", "Checklist", FieldType::List, "Subtasks or steps within the card", false, false, true),
    ("progress", "Progress (%)", FieldType::Number, "Completion percentage", false, false, true),
    ("dependencies", "Dependencies", FieldType::List, "Tasks that block this card", false, false, true),
    ("related", "Related Issues", FieldType::List, "Linked cards or references", false, false, true),
    ("attachments", "Attachments", FieldType::File, "Images or documents attached", false, false, true),
];

const METRICS: &[Template] = &[
    ("effort", "Effort", FieldType::Number, "Workload or complexity measure", false, false, true),
    ("impact", "Impact", FieldType::Number, "Business value or outcome", false, false, true),
    ("risk", "Risk Level", FieldType::Select, "Likelihood and severity of risk", false, false, true),
    ("confidence", "Confidence", FieldType::Number, "Certainty of estimation (%)", false, false, true),
    ("score", "Score / RICE / WSJF", FieldType::Formula, "Calculated prioritization score", false, false, false),
];

const VISUAL: &[Template] = &[
    ("color", "Color / Label Color", FieldType::Color, "Accent or category color", false, false, true),
    ("icon", "Icon / Emoji", FieldType::Text, "Visual icon or emoji for quick ID", false, false, true),
    ("cover", "Cover Image", FieldType::Image, "Displayed image or banner", false, false, true),
    ("badge", "Custom Badge", FieldType::Text, "Short tag or highlight", false, false, true),
];

const COMMUNICATION: &[Template] = &[
    ("comments", "Comments", FieldType::List, "Threaded feedback or discussion", false, false, true),
    ("mentions", "Mentions", FieldType::MultiSelect, "Users mentioned in comments", false, false, true),
    ("activityLog", "Activity Log", FieldType::List, "History of actions or changes", false, false, false),
    ("links", "External Links", FieldType::List, "References or external docs", false, false, true),
];

const AUTOMATION: &[Template] = &[
    ("webhook", "Webhook Triggered", FieldType::Boolean, "Whether automation ran", false, false, false),
    ("integrationId", "Integration ID", FieldType::Text, "External system reference", false, false, true),
    ("commitLink", "Commit / PR Link", FieldType::Text, "Git commit or PR reference", false, false, true),
    ("lastSynced", "Last Synced", FieldType::Date, "Last update from integration", false, false, false),
];

const GROUPS: &[(&str, &[Template])] = &[
    ("Core", CORE),
    ("Time Tracking", TIME_TRACKING),
    ("People", PEOPLE),
    ("Classification", CLASSIFICATION),
    ("Task Management", TASK_MANAGEMENT),
    ("Productivity / Metrics", METRICS),
    ("Visual", VISUAL),
    ("Communication", COMMUNICATION),
    ("Automation / Integration", AUTOMATION),
];

/// The user's copy of the field catalog, with their display toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    groups: Vec<FieldGroup>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::template()
    }
}

impl FieldSchema {
    /// Fresh schema from the built-in catalog
    pub fn template() -> Self {
        let groups = GROUPS
            .iter()
            .map(|(group, fields)| FieldGroup {
                group: group.to_string(),
                fields: fields
                    .iter()
                    .map(
                        |&(name, label, field_type, description, kanban, editor, editable)| {
                            FieldDefinition {
                                name: name.to_string(),
                                label: label.to_string(),
                                field_type,
                                description: description.to_string(),
                                show_in_kanban: kanban,
                                show_in_editor: editor,
                                editable,
                            }
                        },
                    )
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.groups.iter().flat_map(|group| group.fields.iter())
    }

    pub fn find(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().find(|field| field.name == name)
    }

    /// Flip one display toggle of a field. Returns the new value.
    pub fn toggle(&mut self, name: &str, flag: FieldFlag) -> KanbanResult<bool> {
        let field = self
            .groups
            .iter_mut()
            .flat_map(|group| group.fields.iter_mut())
            .find(|field| field.name == name)
            .ok_or_else(|| KanbanError::NotFound(format!("field {}", name)))?;

        let value = match flag {
            FieldFlag::ShowInKanban => &mut field.show_in_kanban,
            FieldFlag::ShowInEditor => &mut field.show_in_editor,
        };
        *value = !*value;
        Ok(*value)
    }
}
