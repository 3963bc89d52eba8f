use crate::cli::GlobalFlags;
use crate::commands::shared::rows::comment_views;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.get_task(task_id).await?;
    let comments = ctx.service.list_comments(task_id).await?;
    output(&comment_views(comments, ctx).await?, flags.format)
}
