mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

async fn dispatch(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Board(board_cmd) => handlers::board::handle(ctx, board_cmd.action).await,
        Commands::Column(column_cmd) => handlers::column::handle(ctx, column_cmd.action).await,
        Commands::Card(card_cmd) => handlers::card::handle(ctx, card_cmd.action).await,
        Commands::Fields(fields_cmd) => {
            handlers::fields::handle_fields(ctx, fields_cmd.action).await
        }
        Commands::Schema(schema_cmd) => {
            handlers::fields::handle_schema(ctx, schema_cmd.action).await
        }
        Commands::Drag(args) => handlers::drag::handle(ctx, args).await,
        Commands::Completions { .. } => Ok(()),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = CliContext::load(cli.data_dir).await?;
    let result = dispatch(&mut ctx, cli.command).await;
    // queued saves are flushed even when the command failed halfway
    ctx.finish().await?;
    result
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        output::output_error(&format!("Failed to open debug log: {}", e));
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
}
