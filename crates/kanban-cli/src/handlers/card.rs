use crate::cli::{CardAction, CardFieldArgs};
use crate::context::CliContext;
use crate::output;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::commands::{AddCard, DeleteCard, MoveCard, ReorderCards, UpdateCard};
use kanban_domain::{parse_due_date, Card, CardId, CardPatch, ColumnId, FieldUpdate};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardLocation<'a> {
    #[serde(flatten)]
    card: &'a Card,
    column_id: &'a ColumnId,
    index: usize,
}

fn card_output<'a>(ctx: &'a CliContext, card_id: &CardId) -> KanbanResult<CardLocation<'a>> {
    let board = ctx.board();
    let card = board
        .card(card_id)
        .ok_or_else(|| KanbanError::card_not_found(card_id))?;
    let (column_id, index) = board
        .locate_card(card_id)
        .ok_or_else(|| KanbanError::Internal(format!("card {} has no column", card_id)))?;
    Ok(CardLocation {
        card,
        column_id,
        index,
    })
}

/// Only the flags given on the command line end up in the patch. An empty
/// `--due-date` clears the date.
fn build_patch(args: CardFieldArgs) -> KanbanResult<CardPatch> {
    let mut patch = CardPatch::new();
    patch.title = args.title.map(|title| title.trim().to_string());
    patch.description = args.description;
    patch.assignee = args.assignee.map(|assignee| assignee.trim().to_string());
    if let Some(raw) = args.due_date {
        patch.due_date = match parse_due_date(&raw)? {
            Some(date) => FieldUpdate::Set(date),
            None => FieldUpdate::Clear,
        };
    }
    if let Some(raw) = args.priority {
        patch.priority = Some(raw.parse()?);
    }
    Ok(patch)
}

pub async fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Add(args) => {
            let column_id = ColumnId::from(args.column);
            let mut patch = build_patch(args.fields)?;
            if patch.title.is_none() {
                patch.title = Some(ctx.default_card_title());
            }
            let command = AddCard::new(column_id, patch);
            ctx.execute(&command)?;
            output::output_success(card_output(ctx, &command.card_id)?);
        }
        CardAction::Get { id } => {
            output::output_success(card_output(ctx, &CardId::from(id))?);
        }
        CardAction::Update(args) => {
            let card_id = CardId::from(args.id);
            let patch = build_patch(args.fields)?;
            if patch.is_empty() {
                return Err(KanbanError::Validation("Nothing to update".to_string()).into());
            }
            ctx.execute(&UpdateCard {
                card_id: card_id.clone(),
                patch,
            })?;
            output::output_success(card_output(ctx, &card_id)?);
        }
        CardAction::Delete { id, column } => {
            let card_id = CardId::from(id);
            ctx.execute(&DeleteCard {
                card_id: card_id.clone(),
                column_id: ColumnId::from(column),
            })?;
            output::output_success(serde_json::json!({"deleted": card_id}));
        }
        CardAction::Move {
            id,
            from,
            to,
            index,
        } => {
            let card_id = CardId::from(id);
            let from_column_id = ColumnId::from(from);
            let to_column_id = ColumnId::from(to);
            ctx.require_column(&from_column_id)?;
            ctx.require_column(&to_column_id)?;
            ctx.require_card(&card_id)?;

            let to_index = match index {
                Some(index) => index,
                None => ctx
                    .board()
                    .column(&to_column_id)
                    .map(|column| column.len())
                    .unwrap_or_default(),
            };
            ctx.execute(&MoveCard {
                card_id: card_id.clone(),
                from_column_id,
                to_column_id,
                to_index,
            })?;
            output::output_success(card_output(ctx, &card_id)?);
        }
        CardAction::Reorder { column, order } => {
            let column_id = ColumnId::from(column);
            let order: Vec<CardId> = order
                .into_iter()
                .map(|id| CardId::from(id.trim()))
                .collect();
            ctx.execute(&ReorderCards {
                column_id: column_id.clone(),
                order,
            })?;
            output::output_success(ctx.board().column(&column_id));
        }
    }
    Ok(())
}
