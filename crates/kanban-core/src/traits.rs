use crate::KanbanResult;

/// A form-shaped copy of an entity that is edited as plain values and
/// turned back into a typed patch on save.
pub trait Editable<T>: Sized {
    type Patch;

    fn from_entity(entity: &T) -> Self;

    fn into_patch(self) -> KanbanResult<Self::Patch>;
}
