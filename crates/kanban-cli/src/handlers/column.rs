use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output;
use kanban_core::KanbanError;
use kanban_domain::commands::{AddColumn, DeleteColumn, RenameColumn, ReorderColumns};
use kanban_domain::{reorder, ColumnId};

pub async fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Add { title } => {
            let title = title.unwrap_or_else(|| ctx.default_column_title());
            let command = AddColumn::new(Some(title));
            ctx.execute(&command)?;
            output::output_success(ctx.board().column(&command.column_id));
        }
        ColumnAction::Rename { id, title } => {
            let column_id = ColumnId::from(id);
            ctx.execute(&RenameColumn {
                column_id: column_id.clone(),
                title,
            })?;
            output::output_success(ctx.board().column(&column_id));
        }
        ColumnAction::Delete { id } => {
            let column_id = ColumnId::from(id);
            let removed_cards = ctx
                .board()
                .column(&column_id)
                .map(|column| column.card_ids.clone())
                .unwrap_or_default();
            ctx.execute(&DeleteColumn {
                column_id: column_id.clone(),
            })?;
            output::output_success(serde_json::json!({
                "deleted": column_id,
                "removedCards": removed_cards,
            }));
        }
        ColumnAction::Move { id, to_index } => {
            let column_id = ColumnId::from(id);
            let order = reorder::move_item(ctx.board().column_order(), &column_id, to_index)
                .ok_or_else(|| KanbanError::column_not_found(&column_id))?;
            ctx.execute(&ReorderColumns { order })?;
            output::output_success(serde_json::json!({
                "columnOrder": ctx.board().column_order(),
            }));
        }
        ColumnAction::List => {
            let columns = ctx.board().ordered_columns().cloned().collect();
            output::output_list::<kanban_domain::Column>(columns);
        }
    }
    Ok(())
}
