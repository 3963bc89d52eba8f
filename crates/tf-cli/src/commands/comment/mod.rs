mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;

/// Handle `tfl comment`.
pub async fn handle(action: &CommentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CommentCommands::Add { task_id, content } => add::run(task_id, content, ctx, flags).await,
        CommentCommands::List { task_id } => list::run(task_id, ctx, flags).await,
    }
}
