use clap::Subcommand;

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Comment on a task as the acting user.
    Add { task_id: String, content: String },
    /// List comments on a task, oldest first.
    List { task_id: String },
}
