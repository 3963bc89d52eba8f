use tf_core::responses::UserResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profiles = ctx.service.list_profiles().await?;
    let mut users = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        let role = ctx.service.get_role(&profile.user_id).await?;
        users.push(UserResponse::new(profile, role));
    }
    output(&users, flags.format)
}
