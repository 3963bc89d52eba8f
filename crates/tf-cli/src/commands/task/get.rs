use tf_core::responses::TaskDetailResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::rows::{comment_views, task_row};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let task = ctx.service.get_task(id).await?;
    let attachments = ctx.service.list_attachments(id).await?;
    let comments = ctx.service.list_comments(id).await?;

    let response = TaskDetailResponse {
        task: task_row(task, &viewer, ctx).await?,
        attachments,
        comments: comment_views(comments, ctx).await?,
    };
    output(&response, flags.format)
}
