use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task owned by the acting user.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// pending, in_progress, or completed
        #[arg(long)]
        status: Option<String>,
        /// YYYY-MM-DD, YYYY-MM-DDTHH:MM, or RFC 3339
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description.
        #[arg(long)]
        clear_description: bool,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Mark a task in progress.
    Start { id: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Delete a task with its comments and attachments.
    Delete { id: String },
    /// Show a task with its attachments and comments.
    Get { id: String },
    /// List tasks, soonest deadline first.
    List {
        /// Only tasks owned by the acting user.
        #[arg(long)]
        mine: bool,
        /// Stored status filter.
        #[arg(long)]
        status: Option<String>,
        /// Only overdue tasks.
        #[arg(long)]
        overdue: bool,
        /// Substring of title or description.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
