use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.get_task(task_id).await?;
    let attachments = ctx.service.list_attachments(task_id).await?;
    output(&attachments, flags.format)
}
