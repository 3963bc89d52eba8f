use std::path::Path;

use anyhow::{Context, bail};
use tf_core::entities::TaskAttachment;
use tf_core::policy::Viewer;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Upload each file in turn. A failed file is logged and skipped; the
/// command fails only when nothing was uploaded.
pub async fn run(task_id: &str, paths: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    ctx.service.ensure_can_modify(&viewer, task_id).await?;

    let mut uploaded = Vec::with_capacity(paths.len());
    for path in paths {
        match upload_one(task_id, Path::new(path), &viewer, ctx).await {
            Ok(attachment) => uploaded.push(attachment),
            Err(error) => tracing::warn!(%path, "upload failed: {error:#}"),
        }
    }

    if uploaded.is_empty() {
        bail!("no files were uploaded to {task_id}");
    }
    output(&uploaded, flags.format)
}

async fn upload_one(
    task_id: &str,
    path: &Path,
    viewer: &Viewer,
    ctx: &AppContext,
) -> anyhow::Result<TaskAttachment> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(ctx.service.add_attachment(viewer, task_id, file_name, bytes).await?)
}
