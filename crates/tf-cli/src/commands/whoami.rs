use tf_core::responses::UserResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tfl whoami`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer().await?;
    let profile = ctx.service.get_profile(&viewer.user_id).await?;
    output(&UserResponse::new(&profile, Some(viewer.role)), flags.format)
}
