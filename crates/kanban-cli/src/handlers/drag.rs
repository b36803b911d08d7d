use crate::cli::DragArgs;
use crate::context::CliContext;
use crate::output;
use kanban_core::KanbanError;
use kanban_domain::{BoardView, DragCoordinator, DragEvent};

pub async fn handle(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    let script = tokio::fs::read_to_string(&args.script).await?;
    let events: Vec<DragEvent> = serde_json::from_str(&script).map_err(|e| {
        KanbanError::MalformedInput(format!("drag script {}: {}", args.script.display(), e))
    })?;
    let event_count = events.len();

    let mut coordinator = DragCoordinator::new();
    let outcome = coordinator.replay(ctx.store_mut(), events);
    if coordinator.is_dragging() {
        tracing::warn!("Drag script ended mid-gesture");
        coordinator.end();
    }

    let visible = ctx.repository.load_visible_fields().await?;
    output::output_success(serde_json::json!({
        "events": event_count,
        "changes": outcome.changes,
        "rejected": outcome.rejected,
        "board": BoardView::new(ctx.board(), &visible),
    }));
    Ok(())
}
