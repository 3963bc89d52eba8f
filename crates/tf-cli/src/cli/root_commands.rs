use clap::{Args, Subcommand};

use crate::cli::subcommands::{AttachCommands, CommentCommands, TaskCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize TaskFlow in a directory.
    Init(InitArgs),
    /// Users and roles.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Show the acting user.
    Whoami,
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Task comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Task attachments.
    Attach {
        #[command(subcommand)]
        action: AttachCommands,
    },
    /// Dashboard statistics.
    Stats(StatsArgs),
}

/// Arguments for `tfl init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    pub path: Option<String>,
    /// Fixed UTC offset (±HH:MM) for deciding what "today" is.
    #[arg(long)]
    pub utc_offset: Option<String>,
}

/// Arguments for `tfl stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// JSON file holding an array of task records; skips the local database.
    #[arg(long)]
    pub input: Option<String>,
}
