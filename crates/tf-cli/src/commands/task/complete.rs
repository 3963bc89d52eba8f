use tf_core::enums::TaskStatus;
use tf_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::rows::task_row;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let update = TaskUpdateBuilder::new().status(TaskStatus::Completed).build();
    let task = ctx.service.update_task(&viewer, id, update).await?;
    output(&task_row(task, &viewer, ctx).await?, flags.format)
}
