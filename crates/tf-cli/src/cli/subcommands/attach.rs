use clap::Subcommand;

/// Attachment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttachCommands {
    /// Upload files to a task.
    Add {
        task_id: String,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// List attachments on a task, newest first.
    List { task_id: String },
    /// Download an attachment.
    Get {
        id: String,
        #[arg(long)]
        out: String,
    },
}
