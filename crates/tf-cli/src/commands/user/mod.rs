mod add;
mod list;
mod role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `tfl user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { name, role } => add::run(name, role, ctx, flags).await,
        UserCommands::List => list::run(ctx, flags).await,
        UserCommands::Role { user_id, role } => role::run(user_id, role, ctx, flags).await,
    }
}
