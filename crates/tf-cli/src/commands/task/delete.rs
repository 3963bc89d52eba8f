use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    ctx.service.delete_task(&viewer, id).await?;
    output(&json!({ "deleted": true, "task_id": id }), flags.format)
}
