use crate::cli::{FieldsAction, SchemaAction};
use crate::context::CliContext;
use crate::output;
use kanban_core::KanbanError;
use kanban_domain::view::DISPLAY_FIELDS;
use kanban_domain::FieldFlag;
use serde::Serialize;

#[derive(Serialize)]
struct FieldVisibility {
    name: String,
    visible: bool,
}

pub async fn handle_fields(ctx: &mut CliContext, action: FieldsAction) -> anyhow::Result<()> {
    let mut visible = ctx.repository.load_visible_fields().await?;

    let (name, shown) = match action {
        FieldsAction::List => {
            let items = visible
                .iter()
                .map(|(name, visible)| FieldVisibility {
                    name: name.to_string(),
                    visible,
                })
                .collect();
            output::output_list::<FieldVisibility>(items);
            return Ok(());
        }
        FieldsAction::Show { name } => (name, true),
        FieldsAction::Hide { name } => (name, false),
    };

    if !DISPLAY_FIELDS.contains(&name.as_str()) {
        return Err(KanbanError::Validation(format!(
            "'{}' cannot be shown on the board, expected one of: {}",
            name,
            DISPLAY_FIELDS.join(", ")
        ))
        .into());
    }
    visible.set(name.clone(), shown);
    ctx.repository.save_visible_fields(&visible).await?;
    output::output_success(FieldVisibility {
        name,
        visible: shown,
    });
    Ok(())
}

pub async fn handle_schema(ctx: &mut CliContext, action: SchemaAction) -> anyhow::Result<()> {
    let mut schema = ctx.repository.load_field_schema().await?;

    match action {
        SchemaAction::List => {
            output::output_list(schema.groups().to_vec());
        }
        SchemaAction::Toggle {
            field,
            kanban: _,
            editor,
        } => {
            let flag = if editor {
                FieldFlag::ShowInEditor
            } else {
                FieldFlag::ShowInKanban
            };
            schema.toggle(&field, flag)?;
            ctx.repository.save_field_schema(&schema).await?;
            output::output_success(schema.find(&field));
        }
    }
    Ok(())
}
