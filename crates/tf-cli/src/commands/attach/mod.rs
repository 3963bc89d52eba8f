mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttachCommands;
use crate::context::AppContext;

/// Handle `tfl attach`.
pub async fn handle(action: &AttachCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AttachCommands::Add { task_id, paths } => add::run(task_id, paths, ctx, flags).await,
        AttachCommands::List { task_id } => list::run(task_id, ctx, flags).await,
        AttachCommands::Get { id, out } => get::run(id, out, ctx, flags).await,
    }
}
