use tf_core::enums::Role;
use tf_core::responses::UserResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(user_id: &str, role: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(role, "role")?;
    let viewer = ctx.viewer().await?;
    ctx.service.set_role(&viewer, user_id, role).await?;
    let profile = ctx.service.get_profile(user_id).await?;
    output(&UserResponse::new(&profile, Some(role)), flags.format)
}
