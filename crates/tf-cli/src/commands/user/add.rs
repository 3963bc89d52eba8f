use tf_core::enums::Role;
use tf_core::responses::UserResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(name: &str, role: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(role, "role")?;
    let profile = ctx.service.create_user(name, role).await?;
    output(&UserResponse::new(&profile, Some(role)), flags.format)
}
