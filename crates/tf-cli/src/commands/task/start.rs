use tf_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::rows::task_row;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let task = ctx.service.transition_task(&viewer, id, TaskStatus::InProgress).await?;
    output(&task_row(task, &viewer, ctx).await?, flags.format)
}
