use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "A kanban board with drag-and-drop reordering", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")"))]
pub struct Cli {
    /// Directory holding the stored board (or set KANBAN_DATA_DIR env var)
    #[arg(long, global = true, value_name = "DIR", env = "KANBAN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Whole-board operations
    Board(BoardCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Card operations
    Card(CardCommand),
    /// Card fields shown on the board
    Fields(FieldsCommand),
    /// Field catalog toggles
    Schema(SchemaCommand),
    /// Replay a recorded drag-and-drop gesture
    Drag(DragArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Show columns and cards with the visible fields
    Show,
    /// Print the stored board as is
    Dump,
    /// Replace the board with the sample board
    Reset,
    /// Check the stored board for consistency
    Validate,
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a new column
    Add {
        #[arg(long)]
        title: Option<String>,
    },
    /// Rename a column
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Delete a column and all of its cards
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Move a column to another position
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        to_index: usize,
    },
    /// List columns in board order
    List,
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a card at the end of a column
    Add(CardAddArgs),
    /// Get a card and where it sits
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update card fields
    Update(CardUpdateArgs),
    /// Delete a card from its column
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        column: String,
    },
    /// Move a card within or across columns
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Target position, defaults to the end of the column
        #[arg(long)]
        index: Option<usize>,
    },
    /// Set the card order of a column
    Reorder {
        #[arg(long)]
        column: String,
        /// Every card id of the column, comma separated
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        order: Vec<String>,
    },
}

#[derive(Args)]
pub struct CardFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    /// YYYY-MM-DD, or an empty string to clear
    #[arg(long)]
    pub due_date: Option<String>,
    /// low, medium, high, or an empty string to clear
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct CardAddArgs {
    #[arg(long)]
    pub column: String,
    #[command(flatten)]
    pub fields: CardFieldArgs,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub fields: CardFieldArgs,
}

// Visible fields
#[derive(Args)]
pub struct FieldsCommand {
    #[command(subcommand)]
    pub action: FieldsAction,
}

#[derive(Subcommand)]
pub enum FieldsAction {
    /// List field visibility
    List,
    /// Show a field on the board
    Show { name: String },
    /// Hide a field from the board
    Hide { name: String },
}

// Field schema
#[derive(Args)]
pub struct SchemaCommand {
    #[command(subcommand)]
    pub action: SchemaAction,
}

#[derive(Subcommand)]
pub enum SchemaAction {
    /// List field groups with their toggles
    List,
    /// Flip a field's kanban or editor toggle
    Toggle {
        #[arg(long)]
        field: String,
        #[arg(long, conflicts_with = "editor", required_unless_present = "editor")]
        kanban: bool,
        #[arg(long)]
        editor: bool,
    },
}

#[derive(Args)]
pub struct DragArgs {
    /// JSON array of drag events
    #[arg(long, value_name = "FILE")]
    pub script: PathBuf,
}
