pub mod board;
pub mod card;
pub mod column;
pub mod commands;
pub mod drag;
pub mod editable;
pub mod field_update;
pub mod fields;
mod id;
pub mod operations;
pub mod reorder;
pub mod store;
pub mod view;
pub mod visibility;

pub use board::Board;
pub use card::{parse_due_date, Card, CardId, CardPatch, CardPriority, DEFAULT_CARD_TITLE};
pub use column::{Column, ColumnId, DEFAULT_COLUMN_TITLE};
pub use drag::{DragCoordinator, DragEvent, GestureState, ReplayOutcome, TransferPayload};
pub use editable::CardForm;
pub use field_update::FieldUpdate;
pub use fields::{FieldDefinition, FieldFlag, FieldGroup, FieldSchema, FieldType};
pub use store::{BoardStore, ChangeSink};
pub use view::{BoardView, CardView, ColumnView};
pub use visibility::VisibleFields;
