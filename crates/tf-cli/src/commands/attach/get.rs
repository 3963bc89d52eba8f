use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, out: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (attachment, bytes) = ctx.service.read_attachment(id).await?;
    tokio::fs::write(out, &bytes)
        .await
        .with_context(|| format!("failed to write {out}"))?;
    output(
        &json!({
            "id": attachment.id,
            "file_name": attachment.file_name,
            "file_type": attachment.file_type,
            "bytes": bytes.len(),
            "written_to": out,
        }),
        flags.format,
    )
}
