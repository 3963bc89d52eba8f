mod complete;
mod create;
mod delete;
mod get;
mod list;
mod start;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `tfl task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            description,
            status,
            deadline,
        } => {
            create::run(
                title,
                description.as_deref(),
                status.as_deref(),
                deadline.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Update {
            id,
            title,
            description,
            clear_description,
            status,
            deadline,
        } => {
            let description = if *clear_description {
                Some(None)
            } else {
                description.as_deref().map(Some)
            };
            update::run(
                id,
                update::UpdateArgs {
                    title: title.as_deref(),
                    description,
                    status: status.as_deref(),
                    deadline: deadline.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Start { id } => start::run(id, ctx, flags).await,
        TaskCommands::Complete { id } => complete::run(id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::List {
            mine,
            status,
            overdue,
            search,
            limit,
        } => {
            list::run(
                list::ListArgs {
                    mine: *mine,
                    status: status.as_deref(),
                    overdue: *overdue,
                    search: search.as_deref(),
                    limit: *limit,
                },
                ctx,
                flags,
            )
            .await
        }
    }
}
