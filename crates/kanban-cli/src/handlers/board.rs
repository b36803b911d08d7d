use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use kanban_domain::commands::InitBoard;
use kanban_domain::BoardView;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Show => {
            let visible = ctx.repository.load_visible_fields().await?;
            output::output_success(BoardView::new(ctx.board(), &visible));
        }
        BoardAction::Dump => {
            output::output_success(ctx.board());
        }
        BoardAction::Reset => {
            // drop the stored blob first so the queued sample save replaces it
            ctx.repository.clear_board().await?;
            ctx.execute(&InitBoard::sample())?;
            let visible = ctx.repository.load_visible_fields().await?;
            output::output_success(BoardView::new(ctx.board(), &visible));
        }
        BoardAction::Validate => {
            ctx.board().validate()?;
            output::output_success(serde_json::json!({
                "valid": true,
                "columns": ctx.board().column_order().len(),
                "cards": ctx.board().cards().len(),
            }));
        }
    }
    Ok(())
}
